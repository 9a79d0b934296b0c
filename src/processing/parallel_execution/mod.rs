// 並列実行機能
// タスクごとに処理単位を起動し、チャンネルで結果を集める

pub mod worker;
pub mod dispatcher;

// 公開API
pub use worker::process_rename;
pub use dispatcher::{spawn_rename_unit, RenameDispatcher};
