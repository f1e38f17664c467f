//! メインアプリケーションコンポーネント
//!
//! 画面状態は `ViewController` 1つが持ち、各セクションはその状態から描画する。

use crate::api::parser_client::{upload_resume, validate_file};
use crate::components::{
    error_panel::ErrorPanel,
    header::Header,
    loading_indicator::LoadingIndicator,
    results_grid::ResultsGrid,
    upload_area::UploadArea,
};
use leptos::html;
use leptos::prelude::*;
use resume_parser_common::upload::ACCEPT_ATTRIBUTE;
use resume_parser_common::{ApiConfig, ViewController, ViewState};
use web_sys::File;

/// 実行中ページのホスト名
fn current_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(ViewController::new());
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let api = ApiConfig::default();
    let upload_url = api.upload_url(&current_hostname());
    let timeout_seconds = api.timeout_seconds;

    // ファイル受付ハンドラ（Idle以外では無視）
    let on_file = move |file: File| {
        if !controller.with_untracked(|c| c.state().is_idle()) {
            return;
        }

        if let Err(e) = validate_file(&file) {
            controller.update(|c| {
                let _ = c.reject(&e);
            });
            return;
        }

        let mut ticket = None;
        controller.update(|c| ticket = c.begin_upload().ok());
        let Some(ticket) = ticket else {
            return;
        };

        let upload_url = upload_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo::console::log!("uploading", file.name(), "to", upload_url.as_str());
            let started = js_sys::Date::now();
            let outcome = upload_resume(&upload_url, &file, timeout_seconds).await;
            match &outcome {
                Ok(result) => gloo::console::log!(
                    "parsed fields:",
                    result.len(),
                    "in ms:",
                    js_sys::Date::now() - started
                ),
                Err(e) => gloo::console::error!("Upload error:", e.to_string()),
            }
            controller.update(|c| {
                let _ = c.complete(ticket, outcome);
            });
        });
    };

    // ファイル選択ダイアログの変更
    let on_change = {
        let on_file = on_file.clone();
        move |_| {
            let file = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    // 初期状態に戻す（選択済みファイルもクリア）
    let on_reset = move |_: ()| {
        controller.update(|c| {
            let _ = c.reset();
        });
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="container">
            <Header />

            <input
                type="file"
                accept=ACCEPT_ATTRIBUTE
                style="display: none"
                node_ref=file_input
                on:change=on_change
            />

            {move || match controller.with(|c| c.state().clone()) {
                ViewState::Idle => view! {
                    <UploadArea file_input=file_input on_file=on_file.clone() />
                }
                .into_any(),
                ViewState::Loading => view! { <LoadingIndicator /> }.into_any(),
                ViewState::Results { cards, .. } => view! {
                    <ResultsGrid cards=cards on_reset=on_reset />
                }
                .into_any(),
                ViewState::Error { message } => view! {
                    <ErrorPanel message=message on_reset=on_reset />
                }
                .into_any(),
            }}
        </div>
    }
}
