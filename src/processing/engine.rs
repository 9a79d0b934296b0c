// RenameEngine - 依存性注入による一括リネームエンジン
// 全ての依存関係がコンストラクタで注入される

use super::config::DispatchConfig;
use super::parallel_execution::RenameDispatcher;
use super::reporting::OutcomeReporter;
use crate::core::{RenameResult, RenameSummary, RenameTask};
use crate::storage::FileSystemBackend;
use std::sync::Arc;

/// 一括リネームエンジン
///
/// バックエンド・設定・報告先をコンストラクタで受け取る。
/// 処理単位がバックエンドを共有するため、内部では `Arc` で保持する。
pub struct RenameEngine<B, C, R> {
    backend: Arc<B>,
    config: C,
    reporter: R,
}

impl<B, C, R> RenameEngine<B, C, R>
where
    B: FileSystemBackend + 'static,
    C: DispatchConfig,
    R: OutcomeReporter,
{
    /// 新しいエンジンを作成
    pub fn new(backend: B, config: C, reporter: R) -> Self {
        Self {
            backend: Arc::new(backend),
            config,
            reporter,
        }
    }

    /// デシリアライズ済みのタスクリストを処理
    pub async fn run(&self, tasks: Vec<RenameTask>) -> RenameResult<RenameSummary> {
        RenameDispatcher::new(self.backend.clone())
            .execute(tasks, &self.config, &self.reporter)
            .await
    }

    /// JSONペイロードを解析して処理
    ///
    /// 解析に失敗した場合はリネームを一切行わずにエラーを返す。
    pub async fn run_payload(&self, payload: &str) -> RenameResult<RenameSummary> {
        let tasks = RenameTask::from_json_list(payload)?;
        self.run(tasks).await
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
