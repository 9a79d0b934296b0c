// 結果報告のトレイト定義

use crate::core::{RenameOutcome, RenameSummary};

/// 結果報告を抽象化するトレイト
#[async_trait::async_trait]
pub trait OutcomeReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_tasks: usize);

    /// 1タスク分の結果の報告（完了順に呼ばれる）
    async fn report_outcome(&self, outcome: &RenameOutcome);

    /// 処理完了時の報告
    async fn report_completed(&self, summary: &RenameSummary);
}
