use super::traits::OutcomeReporter;
use crate::core::{RenameOutcome, RenameSummary};
use async_trait::async_trait;

/// 標準出力への結果報告実装
///
/// 出力行の書式は呼び出し側のパーサーと共有しているため変更しないこと。
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(total_tasks: usize) -> String {
        format!("🚀 [Go Engine] Starting bulk processing of {total_tasks} items...")
    }
}

#[async_trait]
impl OutcomeReporter for ConsoleReporter {
    async fn report_started(&self, total_tasks: usize) {
        println!("{}", Self::banner(total_tasks));
    }

    async fn report_outcome(&self, outcome: &RenameOutcome) {
        println!("{outcome}");
    }

    async fn report_completed(&self, _summary: &RenameSummary) {
        // サマリー行は出さない
    }
}

/// 何もしない結果報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutcomeReporter for NoOpReporter {
    async fn report_started(&self, _total_tasks: usize) {
        // 何もしない
    }

    async fn report_outcome(&self, _outcome: &RenameOutcome) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &RenameSummary) {
        // 何もしない
    }
}
