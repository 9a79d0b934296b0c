// 統合テスト共通のフィクスチャ
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `count` 個のファイルを作り、(ソース, 移動先) のペアを返す
pub fn create_rename_pairs(count: usize) -> (TempDir, Vec<(PathBuf, PathBuf)>) {
    let temp_dir = TempDir::new().unwrap();

    let pairs = (0..count)
        .map(|i| {
            let source = temp_dir.path().join(format!("track_{i:04}.wav"));
            let dest = temp_dir.path().join(format!("renamed_{i:04}.wav"));
            fs::write(&source, format!("content {i}")).unwrap();
            (source, dest)
        })
        .collect();

    (temp_dir, pairs)
}

/// `[{"src": ..., "dst": ...}]` 形式のペイロードを作る
pub fn payload_for(pairs: &[(PathBuf, PathBuf)]) -> String {
    let tasks: Vec<serde_json::Value> = pairs
        .iter()
        .map(|(source, dest)| {
            serde_json::json!({
                "src": path_str(source),
                "dst": path_str(dest),
            })
        })
        .collect();

    serde_json::Value::Array(tasks).to_string()
}

pub fn path_str(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}
