//! 解析サービス連携
//!
//! FormData の `file` に履歴書を載せて fetch でPOSTする。
//! 応答がタイムアウトより遅い場合は AbortController でリクエストを中断する。

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use resume_parser_common::{interpret_response, Error, ParseResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, File, FormData, Request, RequestInit, RequestMode, Response};

/// multipart のフィールド名
pub const FILE_FIELD: &str = "file";

/// `setTimeout` が受け付ける最大遅延（これを超えると即時発火する）
const MAX_TIMER_MILLIS: u32 = i32::MAX as u32;

/// タイムアウト秒数をタイマー用のミリ秒に変換
pub fn timeout_millis(timeout_seconds: u64) -> u32 {
    timeout_seconds
        .saturating_mul(1000)
        .min(u64::from(MAX_TIMER_MILLIS)) as u32
}

/// 選択されたファイルを検証
pub fn validate_file(file: &File) -> Result<(), Error> {
    resume_parser_common::validate(&file.type_(), file.size() as u64)
}

/// アップロードリクエストを作成
pub fn build_request(upload_url: &str, file: &File, signal: Option<&AbortSignal>) -> Result<Request, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(signal);

    Request::new_with_str_and_init(upload_url, &opts)
}

/// 履歴書をアップロードして解析結果を受け取る
pub async fn upload_resume(
    upload_url: &str,
    file: &File,
    timeout_seconds: u64,
) -> Result<ParseResult, Error> {
    let controller = AbortController::new().map_err(js_error)?;
    let request = build_request(upload_url, file, Some(&controller.signal())).map_err(js_error)?;

    let fetch = Box::pin(send(request));
    let timeout = Box::pin(TimeoutFuture::new(timeout_millis(timeout_seconds)));

    match select(fetch, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => {
            controller.abort();
            Err(Error::Timeout(timeout_seconds))
        }
    }
}

async fn send(request: Request) -> Result<ParseResult, Error> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    interpret_response(status, &body)
}

/// fetch の失敗値をネットワークエラーに変換
///
/// fetch は `TypeError` で reject するので、JS の Error なら `message` だけを使う。
pub fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "request failed".to_string());
    Error::Network(message)
}
