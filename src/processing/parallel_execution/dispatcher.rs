// Dispatcher - タスクごとの並列実行と結果収集

use super::worker::process_rename;
use crate::core::{RenameError, RenameOutcome, RenameResult, RenameSummary, RenameTask};
use crate::processing::config::DispatchConfig;
use crate::processing::reporting::OutcomeReporter;
use crate::storage::FileSystemBackend;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;

/// 1タスク分の処理単位を起動する
///
/// 結果は `try_send` で送る。チャンネル容量はタスク数以上なので待機しない。
pub fn spawn_rename_unit<B>(
    backend: Arc<B>,
    task: RenameTask,
    create_dest_dirs: bool,
    result_tx: mpsc::Sender<RenameOutcome>,
    semaphore: Option<Arc<Semaphore>>,
) -> JoinHandle<RenameResult<()>>
where
    B: FileSystemBackend + 'static,
{
    tokio::spawn(async move {
        // 上限が設定されている場合のみ同時実行数を制御
        let _permit = match semaphore {
            Some(semaphore) => Some(
                semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| RenameError::channel(format!("Semaphore error: {e}")))?,
            ),
            None => None,
        };

        let outcome = process_rename(backend.as_ref(), &task, create_dest_dirs).await;

        result_tx
            .try_send(outcome)
            .map_err(|e| RenameError::channel(format!("結果送信エラー: {e}")))
    })
}

/// 全タスクを並列にディスパッチし、結果を集めるコンポーネント
pub struct RenameDispatcher<B> {
    backend: Arc<B>,
}

impl<B> RenameDispatcher<B>
where
    B: FileSystemBackend + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// タスクリストを処理
    ///
    /// 全ての処理単位が終わるまで戻らない。結果の報告はその後に完了順で行う。
    pub async fn execute<C, R>(
        &self,
        tasks: Vec<RenameTask>,
        config: &C,
        reporter: &R,
    ) -> RenameResult<RenameSummary>
    where
        C: DispatchConfig + ?Sized,
        R: OutcomeReporter + ?Sized,
    {
        if config.max_concurrent_tasks() == Some(0) {
            return Err(RenameError::configuration(
                "最大同時実行数は1以上である必要があります",
            ));
        }

        let start_time = Instant::now();
        let total_tasks = tasks.len();

        if config.report_outcomes() {
            reporter.report_started(total_tasks).await;
        }

        // 収集チャンネル（容量 = タスク数、0件でも作成できるよう最低1）
        let (result_tx, mut result_rx) = mpsc::channel::<RenameOutcome>(total_tasks.max(1));
        let semaphore = config
            .max_concurrent_tasks()
            .map(|limit| Arc::new(Semaphore::new(limit)));

        let handles: Vec<_> = tasks
            .into_iter()
            .map(|task| {
                spawn_rename_unit(
                    self.backend.clone(),
                    task,
                    config.create_dest_dirs(),
                    result_tx.clone(),
                    semaphore.clone(),
                )
            })
            .collect();

        // バリア: 失敗した処理単位があっても全ての完了を待機する
        let mut first_error = None;
        for handle in handles {
            let joined = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(RenameError::task(join_error)),
            };
            if let Err(error) = joined {
                first_error.get_or_insert(error);
            }
        }

        // 自分の送信側を閉じてから受信側を空にする
        drop(result_tx);

        let mut outcomes = Vec::with_capacity(total_tasks);
        while let Some(outcome) = result_rx.recv().await {
            outcomes.push(outcome);
        }

        if let Some(error) = first_error {
            // 実際に行われたリネームは報告してからエラーを返す
            if config.report_outcomes() {
                for outcome in &outcomes {
                    reporter.report_outcome(outcome).await;
                }
            }
            return Err(error);
        }

        if outcomes.len() != total_tasks {
            return Err(RenameError::channel(format!(
                "結果数が一致しません: 期待値 {total_tasks}, 実際 {}",
                outcomes.len()
            )));
        }

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        let summary = RenameSummary::from_outcomes(total_tasks, outcomes, elapsed_ms);

        if config.report_outcomes() {
            for outcome in &summary.outcomes {
                reporter.report_outcome(outcome).await;
            }
            reporter.report_completed(&summary).await;
        }

        Ok(summary)
    }
}
