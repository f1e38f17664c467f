//! アップロードエリアコンポーネント
//!
//! ドロップされた最初の1ファイル、またはクリックで開くファイル選択を受け付ける。

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<F>(
    file_input: NodeRef<html::Input>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon"><i class="fas fa-cloud-upload-alt"></i></div>
            <h3>"Drop your resume here"</h3>
            <p>"or click to browse files"</p>
            <p class="text-muted">"Supported formats: PDF, DOCX (max 10MB)"</p>
        </div>
    }
}
