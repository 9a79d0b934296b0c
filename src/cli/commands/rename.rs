use crate::cli::Cli;
use crate::core::{RenameError, RenameResult, RenameSummary, RenameTask};
use crate::processing::{ConsoleReporter, DefaultDispatchConfig, RenameEngine};
use crate::storage::local::LocalFileSystem;
use std::num::NonZeroUsize;

/// Build the dispatch configuration from command-line flags
pub fn build_config(cli: &Cli) -> DefaultDispatchConfig {
    DefaultDispatchConfig::new()
        .with_max_concurrent(cli.max_concurrent.map(NonZeroUsize::get))
        .with_create_dest_dirs(cli.create_dest_dirs)
        .with_outcome_reporting(!cli.quiet)
}

/// Decode the task payload and run every rename concurrently
///
/// Input errors are returned before any rename is attempted. Per-task
/// failures are reported as result lines and never turn into an `Err`.
pub async fn execute_rename(cli: Cli) -> RenameResult<RenameSummary> {
    let payload = cli.tasks.clone().ok_or_else(RenameError::no_task_data)?;
    let payload = payload
        .into_string()
        .map_err(|_| RenameError::invalid_payload("argument is not valid UTF-8"))?;
    let tasks = RenameTask::from_json_list(&payload)?;

    let engine = RenameEngine::new(
        LocalFileSystem::new(),
        build_config(&cli),
        ConsoleReporter::new(),
    );

    engine.run(tasks).await
}
