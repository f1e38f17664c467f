//! 解析結果カード一覧コンポーネント
//!
//! 値はテキストノードとして挿入する（サービスが返したマークアップは解釈しない）。

use leptos::prelude::*;
use resume_parser_common::{Card, CardContent};

#[component]
pub fn ResultsGrid<F>(cards: Vec<Card>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="results-section">
            <h2>"Extracted Information"</h2>
            <div class="results-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <ResultCard card=card /> })
                    .collect_view()}
            </div>
            <button class="btn btn-secondary" on:click=move |_| on_reset(())>
                "Parse Another Resume"
            </button>
        </div>
    }
}

#[component]
fn ResultCard(card: Card) -> impl IntoView {
    let content = match card.content {
        CardContent::Items(items) => view! {
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        CardContent::Lines(lines) => {
            // 改行は <br> に置き換える
            let last = lines.len().saturating_sub(1);
            lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| view! { {line} {(i < last).then(|| view! { <br /> })} })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="result-card">
            <h3><i class=card.icon.css_class()></i>{card.title}</h3>
            <div class="result-content">{content}</div>
        </div>
    }
}
