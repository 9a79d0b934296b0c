// リネーム処理のデータ構造定義

use super::error::{RenameError, RenameResult};
use serde::Deserialize;
use std::fmt;
use std::path::is_separator;

/// 1件のリネーム要求
///
/// 入力JSONの `{"src": ..., "dst": ...}` をそのままデシリアライズする。
/// 生成後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenameTask {
    #[serde(rename = "src")]
    pub source_path: String,
    #[serde(rename = "dst")]
    pub dest_path: String,
}

impl RenameTask {
    pub fn new(source_path: impl Into<String>, dest_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            dest_path: dest_path.into(),
        }
    }

    /// `[{"src": ..., "dst": ...}, ...]` 形式のJSONからタスクリストを読み込む
    pub fn from_json_list(payload: &str) -> RenameResult<Vec<RenameTask>> {
        serde_json::from_str(payload).map_err(RenameError::parse)
    }
}

/// リネーム前のstatで判定したエントリ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("File"),
            EntryKind::Folder => f.write_str("Folder"),
        }
    }
}

/// 1タスクにつき必ず1つ生成される処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// ソースが存在しなかった（リネームは試行していない）
    NotFound { source_name: String },
    /// リネームが失敗した
    Failed { source_name: String, error: String },
    /// リネーム成功
    Renamed {
        kind: EntryKind,
        source_name: String,
        dest_name: String,
    },
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenameOutcome::Renamed { .. })
    }

    pub fn source_name(&self) -> &str {
        match self {
            RenameOutcome::NotFound { source_name }
            | RenameOutcome::Failed { source_name, .. }
            | RenameOutcome::Renamed { source_name, .. } => source_name,
        }
    }
}

// 呼び出し側はこの行を ✅ / ❌ で判別するため、書式は固定
impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::NotFound { source_name } => {
                write!(f, "❌ Skipped (Not Found): {source_name}")
            }
            RenameOutcome::Failed { source_name, error } => {
                write!(f, "❌ Error Renaming {source_name}: {error}")
            }
            RenameOutcome::Renamed {
                kind,
                source_name,
                dest_name,
            } => write!(
                f,
                "✅ [Go] Renamed {kind}: '{source_name}' -> '{dest_name}'"
            ),
        }
    }
}

/// 一括処理のサマリー
#[derive(Debug, Clone, Default)]
pub struct RenameSummary {
    pub total_tasks: usize,
    pub renamed: usize,
    pub not_found: usize,
    pub failed: usize,
    /// 完了順に並んだ結果
    pub outcomes: Vec<RenameOutcome>,
    pub total_processing_time_ms: u64,
}

impl RenameSummary {
    /// 完了順の結果リストからサマリーを集計
    pub fn from_outcomes(
        total_tasks: usize,
        outcomes: Vec<RenameOutcome>,
        total_processing_time_ms: u64,
    ) -> Self {
        let mut summary = Self {
            total_tasks,
            total_processing_time_ms,
            ..Self::default()
        };

        for outcome in &outcomes {
            match outcome {
                RenameOutcome::NotFound { .. } => summary.not_found += 1,
                RenameOutcome::Failed { .. } => summary.failed += 1,
                RenameOutcome::Renamed { .. } => summary.renamed += 1,
            }
        }

        summary.outcomes = outcomes;
        summary
    }

    pub fn error_count(&self) -> usize {
        self.not_found + self.failed
    }
}

/// パスの最後の要素を返す
///
/// 末尾の区切り文字は取り除く。空文字列は `.`、区切り文字のみなら `/` になる。
pub fn base_name(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return "/".to_string();
    }

    match trimmed.rfind(is_separator) {
        Some(index) => {
            // 区切り文字自体は1文字（'/' または '\'）
            trimmed[index + 1..].to_string()
        }
        None => trimmed.to_string(),
    }
}
