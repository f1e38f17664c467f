//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1><i class="fas fa-file-alt"></i>"Resume Parser"</h1>
            <p class="subtitle">"Upload your resume and extract key information instantly"</p>
        </header>
    }
}
