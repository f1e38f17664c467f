//! アップロード候補と入力検証
//!
//! ブラウザ（ドロップ/ファイル選択）とCLI（パス指定）の両方から使う。
//! 検証順序: MIMEタイプ → ファイルサイズ

use crate::error::{Error, Result};

/// PDFのMIMEタイプ
pub const MIME_PDF: &str = "application/pdf";

/// DOCXのMIMEタイプ
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 判定できないファイルのMIMEタイプ
pub const MIME_UNKNOWN: &str = "application/octet-stream";

/// 受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX];

/// 最大ファイルサイズ（10MiB）
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.docx";

/// アップロード候補
///
/// 選択されてからアップロードが終わるまでの間だけ存在する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub content: Vec<u8>,
}

impl UploadCandidate {
    /// 検証済みの候補を作成
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Result<Self> {
        let mime_type = mime_type.into();
        let size_bytes = content.len() as u64;
        validate(&mime_type, size_bytes)?;
        Ok(Self {
            file_name: file_name.into(),
            mime_type,
            size_bytes,
            content,
        })
    }
}

/// MIMEタイプとサイズを検証
///
/// MIMEタイプを先に判定するため、巨大な非対応ファイルは `InvalidFileType` になる。
pub fn validate(mime_type: &str, size_bytes: u64) -> Result<()> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(Error::InvalidFileType);
    }
    if size_bytes > MAX_FILE_SIZE {
        return Err(Error::FileTooLarge);
    }
    Ok(())
}

/// 拡張子からMIMEタイプを推定（大文字小文字を区別しない）
pub fn mime_type_from_file_name(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(MIME_PDF),
        "docx" => Some(MIME_DOCX),
        _ => None,
    }
}

/// 先頭バイトからMIMEタイプを推定
///
/// DOCXはZIPコンテナなので、ローカルヘッダに加えて `word/` エントリの有無を見る。
pub fn sniff_mime_type(content: &[u8]) -> Option<&'static str> {
    if content.starts_with(b"%PDF-") {
        return Some(MIME_PDF);
    }
    if content.starts_with(b"PK\x03\x04") && contains_subslice(content, b"word/") {
        return Some(MIME_DOCX);
    }
    None
}

/// ファイル名と内容からMIMEタイプを決定
pub fn detect_mime_type(file_name: &str, content: &[u8]) -> &'static str {
    mime_type_from_file_name(file_name)
        .or_else(|| sniff_mime_type(content))
        .unwrap_or(MIME_UNKNOWN)
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
