// 一括リネーム処理のエラー型定義
//
// タスク単位の失敗（存在しない・リネーム失敗）はエラーではなく
// RenameOutcome として扱う。ここにあるのは処理全体を止めるものだけ。

use thiserror::Error;

/// 処理全体を中断するエラー
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Error: No task data provided")]
    NoTaskData,

    #[error("Error parsing JSON: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Error parsing JSON: {message}")]
    InvalidPayload { message: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl RenameError {
    /// 引数なしエラーの作成
    pub fn no_task_data() -> Self {
        Self::NoTaskData
    }

    /// JSON解析エラーの作成
    pub fn parse(source: serde_json::Error) -> Self {
        Self::ParseError { source }
    }

    /// 文字列として読めないペイロードのエラーの作成
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 入力データ起因のエラーかどうか
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NoTaskData | Self::ParseError { .. } | Self::InvalidPayload { .. }
        )
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<serde_json::Error> for RenameError {
    fn from(source: serde_json::Error) -> Self {
        Self::parse(source)
    }
}

impl From<tokio::task::JoinError> for RenameError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::task(source)
    }
}

/// 一括リネーム処理の結果型
pub type RenameResult<T> = Result<T, RenameError>;
