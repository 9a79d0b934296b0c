// 一括リネーム処理のモジュール
// 機能別フォルダ構造によるアーキテクチャ

// 機能モジュール
pub mod config;             // 設定管理
pub mod reporting;          // 結果報告
pub mod parallel_execution; // 並列実行（ディスパッチ・収集）
pub mod engine;             // 依存性注入によるファサード

// 公開API - 各機能から再エクスポート
pub use config::{DispatchConfig, DefaultDispatchConfig};
pub use reporting::{OutcomeReporter, ConsoleReporter, NoOpReporter};
pub use parallel_execution::RenameDispatcher;
pub use engine::RenameEngine;
