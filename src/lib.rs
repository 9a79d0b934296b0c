pub mod core;
pub mod storage;
pub mod processing;
pub mod cli;

pub use crate::core::{
    base_name, EntryKind, RenameError, RenameOutcome, RenameResult, RenameSummary, RenameTask,
};
pub use processing::{
    ConsoleReporter, DefaultDispatchConfig, DispatchConfig, NoOpReporter, OutcomeReporter,
    RenameDispatcher, RenameEngine,
};
pub use storage::{local::LocalFileSystem, FileSystemBackend};

/// 標準構成（ローカルFS・上限なし・出力なし）でタスクリストを処理する
pub async fn rename_all(tasks: Vec<RenameTask>) -> RenameResult<RenameSummary> {
    RenameEngine::new(
        LocalFileSystem::new(),
        DefaultDispatchConfig::default(),
        NoOpReporter::new(),
    )
    .run(tasks)
    .await
}
