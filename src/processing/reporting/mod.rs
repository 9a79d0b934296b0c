// 結果報告
//
// 結果行はバリア（全タスク完了）の後にまとめて報告される。

pub mod traits;
pub mod console;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use traits::*;
pub use console::{ConsoleReporter, NoOpReporter};

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
