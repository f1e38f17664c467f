use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("PDF/DOCXファイルが見つかりません: {0}")]
    NoResumesFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] resume_parser_common::Error),
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;
