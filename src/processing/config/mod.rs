// 一括リネームの設定管理
//
// 設定はCLIフラグからのみ組み立てる（設定ファイル・環境変数は読まない）。

pub mod traits;
pub mod default;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use traits::*;
pub use default::DefaultDispatchConfig;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
