//! 接続先の解決
//!
//! ループバックホストで動いていればローカル開発用、それ以外は本番のエンドポイントを使う。
//! `api_base_url` が指定されていればそれを優先する。

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// ローカル開発用のベースURL
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000";

/// 本番のベースURL
pub const PRODUCTION_API_BASE_URL: &str = "https://resume-parser-6-njyc.onrender.com";

/// アップロードのパス
pub const UPLOAD_PATH: &str = "/uploadfile";

/// タイムアウトの既定値（秒）
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// 接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// 解決済みエンドポイントを上書きする
    pub api_base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ApiConfig {
    /// 実行中のホスト名からベースURLを決定
    pub fn resolve_base_url(&self, host: &str) -> String {
        match self.api_base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => default_base_url(host).to_string(),
        }
    }

    /// アップロード先URL
    pub fn upload_url(&self, host: &str) -> String {
        upload_url(&self.resolve_base_url(host))
    }
}

/// ホスト名に応じた既定のベースURL
pub fn default_base_url(host: &str) -> &'static str {
    if is_loopback_host(host) {
        LOCAL_API_BASE_URL
    } else {
        PRODUCTION_API_BASE_URL
    }
}

/// ベースURLにアップロードパスを付ける（末尾の `/` は無視）
pub fn upload_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), UPLOAD_PATH)
}

/// ループバックホストか
///
/// `localhost` と 127.0.0.0/8、`::1`（角括弧付きも可）。
pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim();
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    bare.parse::<IpAddr>().map(|ip| ip.is_loopback()).unwrap_or(false)
}
