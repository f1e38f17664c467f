use crate::error::{ResumeParserError, Result};
use resume_parser_common::endpoint::{ApiConfig, DEFAULT_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 接続先を上書きする環境変数
pub const API_URL_ENV: &str = "RESUME_PARSER_API_URL";

/// CLIは常にローカルで動くため、エンドポイント解決にはこのホスト名を使う
const CLI_HOST: &str = "localhost";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ResumeParserError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("resume-parser").join("config.json"))
    }

    pub fn set_api_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ResumeParserError::Config(format!(
                "URLは http:// または https:// で始まる必要があります: {}",
                url
            )));
        }
        self.api_base_url = Some(url);
        Ok(())
    }

    /// 実行時の接続設定を組み立てる
    ///
    /// 優先順位: コマンドライン引数 → 環境変数 → 設定ファイル → ホスト名による既定値
    pub fn api_config(&self, url_override: Option<&str>, timeout_override: Option<u64>) -> ApiConfig {
        let env_url = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        let api_base_url = url_override
            .map(str::to_string)
            .or(env_url)
            .or_else(|| self.api_base_url.clone());

        ApiConfig {
            api_base_url,
            timeout_seconds: timeout_override.unwrap_or(self.timeout_seconds),
        }
    }

    /// 最終的なアップロード先
    pub fn upload_url(api: &ApiConfig) -> String {
        api.upload_url(CLI_HOST)
    }
}
