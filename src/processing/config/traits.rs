// 設定管理のトレイト定義

/// ディスパッチ設定を抽象化するトレイト
pub trait DispatchConfig: Send + Sync {
    /// 同時実行数の上限。`None` なら上限なし（タスク数と同じだけ並列）
    fn max_concurrent_tasks(&self) -> Option<usize>;

    /// リネーム前に移動先の親ディレクトリを作成するかどうか
    fn create_dest_dirs(&self) -> bool;

    /// 結果行を出力するかどうか
    fn report_outcomes(&self) -> bool;
}
