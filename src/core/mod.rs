// コアモジュール - データ構造とエラー型

pub mod error;
pub mod types;

// 公開API
pub use error::{RenameError, RenameResult};
pub use types::*;
