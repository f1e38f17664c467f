//! エラー型定義
//!
//! 入力検証・アップロード・画面遷移の失敗を一つの型にまとめる。
//! `user_message()` がエラー画面にそのまま表示される文言。

use thiserror::Error;

/// 汎用の失敗メッセージ（レスポンスが解釈できない場合など）
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process the file. Please try again.";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Please upload a PDF or DOCX file.")]
    InvalidFileType,

    #[error("File size must be less than 10MB.")]
    FileTooLarge,

    #[error("HTTP error! status: {0}")]
    Transport(u16),

    #[error("{0}")]
    Service(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid view transition: {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}

impl Error {
    /// エラー画面に表示する文言
    ///
    /// パース不能なレスポンスは内部詳細を出さず汎用メッセージにする。
    pub fn user_message(&self) -> String {
        match self {
            Error::MalformedResponse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// ローカル検証エラーか（ネットワーク呼び出し前に発生）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidFileType | Error::FileTooLarge)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
