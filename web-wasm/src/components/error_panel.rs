//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorPanel<F>(message: String, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="error-section">
            <div class="error-icon"><i class="fas fa-exclamation-circle"></i></div>
            <h3>"Something went wrong"</h3>
            <p class="error-text">{message}</p>
            <button class="btn btn-primary" on:click=move |_| on_reset(())>
                "Try Again"
            </button>
        </div>
    }
}
