//! 解析サービスへのアップロード
//!
//! multipart の `file` パートに1ファイルを載せて `<base>/uploadfile` にPOSTする。
//! リトライはしない。レスポンスの解釈は共通ライブラリ側で行う。

use crate::config::Config;
use crate::error::{ResumeParserError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use resume_parser_common::{interpret_response, ApiConfig, Error, ParseResult, UploadCandidate};
use std::time::Duration;

/// アップロードクライアント
pub struct ResumeUploader {
    client: Client,
    upload_url: String,
    timeout_seconds: u64,
}

impl ResumeUploader {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        Self::with_url(Config::upload_url(api), api.timeout_seconds)
    }

    pub fn with_url(upload_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ResumeParserError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            upload_url: upload_url.into(),
            timeout_seconds,
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// 1ファイルをアップロードして解析結果を受け取る
    pub async fn upload(&self, candidate: &UploadCandidate) -> std::result::Result<ParseResult, Error> {
        let part = Part::bytes(candidate.content.clone())
            .file_name(candidate.file_name.clone())
            .mime_str(&candidate.mime_type)
            .map_err(|_| Error::InvalidFileType)?;
        let form = Form::new().part("file", part);

        tracing::debug!(
            url = %self.upload_url,
            file = %candidate.file_name,
            bytes = candidate.size_bytes,
            "uploading resume"
        );

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        tracing::debug!(status, body_len = body.len(), "upload response received");
        interpret_response(status, &body)
    }

    fn map_transport_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout(self.timeout_seconds)
        } else {
            Error::Network(error.to_string())
        }
    }
}
