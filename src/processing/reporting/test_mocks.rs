// テスト用の結果報告モック実装

use super::traits::OutcomeReporter;
use crate::core::{RenameOutcome, RenameSummary};
use std::sync::{Arc, Mutex};

/// 呼び出しを記録するだけの報告実装
#[derive(Clone, Default)]
pub struct MockOutcomeReporter {
    pub started_calls: Arc<Mutex<Vec<usize>>>,
    pub outcome_calls: Arc<Mutex<Vec<RenameOutcome>>>,
    pub completed_called: Arc<Mutex<Option<(usize, usize)>>>,
}

impl MockOutcomeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.outcome_calls
            .lock()
            .unwrap()
            .iter()
            .map(|outcome| outcome.to_string())
            .collect()
    }
}

#[async_trait::async_trait]
impl OutcomeReporter for MockOutcomeReporter {
    async fn report_started(&self, total_tasks: usize) {
        self.started_calls.lock().unwrap().push(total_tasks);
    }

    async fn report_outcome(&self, outcome: &RenameOutcome) {
        self.outcome_calls.lock().unwrap().push(outcome.clone());
    }

    async fn report_completed(&self, summary: &RenameSummary) {
        *self.completed_called.lock().unwrap() = Some((summary.renamed, summary.error_count()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryKind;

    #[tokio::test]
    async fn test_outcome_reporter_trait() {
        let reporter = MockOutcomeReporter::new();
        let reporter_ref: &dyn OutcomeReporter = &reporter;

        reporter_ref.report_started(2).await;
        reporter_ref
            .report_outcome(&RenameOutcome::NotFound {
                source_name: "a.txt".to_string(),
            })
            .await;
        reporter_ref
            .report_outcome(&RenameOutcome::Renamed {
                kind: EntryKind::File,
                source_name: "b.txt".to_string(),
                dest_name: "c.txt".to_string(),
            })
            .await;

        let summary = RenameSummary::from_outcomes(2, reporter.outcome_calls.lock().unwrap().clone(), 0);
        reporter_ref.report_completed(&summary).await;

        assert_eq!(*reporter.started_calls.lock().unwrap(), vec![2]);
        assert_eq!(
            reporter.lines(),
            vec![
                "❌ Skipped (Not Found): a.txt".to_string(),
                "✅ [Go] Renamed File: 'b.txt' -> 'c.txt'".to_string(),
            ]
        );
        assert_eq!(*reporter.completed_called.lock().unwrap(), Some((1, 1)));
    }
}
