//! フォルダ一括解析
//!
//! 同時に走るアップロードは常に1件。1ファイルの失敗は記録して次へ進む。

use crate::error::Result;
use crate::scanner;
use crate::uploader::ResumeUploader;
use resume_parser_common::ParseResult;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 既定の出力ファイル名
pub const DEFAULT_REPORT_NAME: &str = "parsed-resumes.json";

/// 1ファイル分の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Parsed(ParseResult),
    Failed { error: String },
}

/// 一括解析の結果（フォルダからの相対パス → 結果）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BatchReport {
    entries: BTreeMap<String, BatchEntry>,
}

impl BatchReport {
    pub fn get(&self, key: &str) -> Option<&BatchEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, BatchEntry::Failed { .. }))
            .count()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// ファイルを順番にアップロード
///
/// # Arguments
/// * `uploader` - アップロードクライアント
/// * `folder` - レポートのキーを相対パスにするための基準フォルダ
/// * `files` - 対象ファイル
/// * `on_progress` - 進捗コールバック (current, total, file_name)
pub async fn parse_files(
    uploader: &ResumeUploader,
    folder: &Path,
    files: &[PathBuf],
    on_progress: impl Fn(usize, usize, &str),
) -> BatchReport {
    let total = files.len();
    let mut report = BatchReport::default();

    for (i, path) in files.iter().enumerate() {
        let key = path
            .strip_prefix(folder)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        on_progress(i + 1, total, &key);

        let entry = match parse_one(uploader, path).await {
            Ok(result) => BatchEntry::Parsed(result),
            Err(error) => {
                tracing::warn!(file = %key, %error, "resume failed");
                BatchEntry::Failed {
                    error: error.to_string(),
                }
            }
        };
        report.entries.insert(key, entry);
    }

    report
}

async fn parse_one(uploader: &ResumeUploader, path: &Path) -> Result<ParseResult> {
    let candidate = scanner::load_candidate(path)?;
    Ok(uploader.upload(&candidate).await?)
}
