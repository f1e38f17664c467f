use crate::error::{ResumeParserError, Result};
use resume_parser_common::upload::{self, mime_type_from_file_name, sniff_mime_type, MIME_UNKNOWN};
use resume_parser_common::UploadCandidate;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 内容から形式を推定する際に読む先頭バイト数
const SNIFF_BYTES: u64 = 8 * 1024;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// ファイルを読み込み、検証済みのアップロード候補にする
///
/// サイズ超過のファイルは本体を読み込む前に弾く。
pub fn load_candidate(path: &Path) -> Result<UploadCandidate> {
    if !path.is_file() {
        return Err(ResumeParserError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mime_type = match mime_type_from_file_name(&file_name) {
        Some(mime) => mime,
        None => sniff_file(path)?,
    };
    let size_bytes = std::fs::metadata(path)?.len();
    upload::validate(mime_type, size_bytes)?;

    let content = std::fs::read(path)?;
    Ok(UploadCandidate::new(file_name, mime_type, content)?)
}

fn sniff_file(path: &Path) -> Result<&'static str> {
    let mut head = Vec::new();
    File::open(path)?.take(SNIFF_BYTES).read_to_end(&mut head)?;
    Ok(sniff_mime_type(&head).unwrap_or(MIME_UNKNOWN))
}

/// フォルダ内のPDF/DOCXを列挙（ファイル名順）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ResumeParserError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_resume_file(p))
        .collect();

    files.sort();
    Ok(files)
}

fn is_resume_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_parser_common::upload::{MAX_FILE_SIZE, MIME_DOCX, MIME_PDF};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_resume_file() {
        assert!(is_resume_file(Path::new("cv.pdf")));
        assert!(is_resume_file(Path::new("CV.PDF")));
        assert!(is_resume_file(Path::new("cv.docx")));
        assert!(!is_resume_file(Path::new("cv.doc")));
        assert!(!is_resume_file(Path::new("photo.jpg")));
        assert!(!is_resume_file(Path::new("README")));
    }

    #[test]
    fn test_load_candidate_pdf() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF-1.7 body").unwrap();

        let candidate = load_candidate(&path).expect("読み込み失敗");
        assert_eq!(candidate.file_name, "resume.pdf");
        assert_eq!(candidate.mime_type, MIME_PDF);
        assert_eq!(candidate.size_bytes, 13);
    }

    #[test]
    fn test_load_candidate_sniffs_unknown_extension() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("resume.bin");
        fs::write(&path, b"PK\x03\x04....word/document.xml").unwrap();

        let candidate = load_candidate(&path).expect("読み込み失敗");
        assert_eq!(candidate.mime_type, MIME_DOCX);
    }

    #[test]
    fn test_load_candidate_rejects_text() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").unwrap();

        let err = load_candidate(&path).unwrap_err();
        assert!(matches!(
            err,
            ResumeParserError::Common(resume_parser_common::Error::InvalidFileType)
        ));
    }

    #[test]
    fn test_load_candidate_rejects_oversized() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("huge.pdf");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        let err = load_candidate(&path).unwrap_err();
        assert!(matches!(
            err,
            ResumeParserError::Common(resume_parser_common::Error::FileTooLarge)
        ));
    }

    #[test]
    fn test_load_candidate_missing_file() {
        let err = load_candidate(Path::new("/nonexistent/cv.pdf")).unwrap_err();
        assert!(matches!(err, ResumeParserError::FileNotFound(_)));
    }

    #[test]
    fn test_scan_folder_top_level_only() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("b.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("a.docx"), b"PK").unwrap();
        fs::write(dir.path().join("c.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("d.pdf"), b"%PDF").unwrap();

        let files = scan_folder(dir.path(), false).expect("スキャン失敗");
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.pdf"]);

        let all = scan_folder(dir.path(), true).expect("スキャン失敗");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_scan_nonexistent_folder() {
        let err = scan_folder(Path::new("/nonexistent/path/12345"), false).unwrap_err();
        assert!(matches!(err, ResumeParserError::FolderNotFound(_)));
    }
}
