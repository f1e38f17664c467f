//! 解析結果 → 表示カード変換
//!
//! カタログを優先度順に走査し、値のあるフィールドだけをカードにする。
//! 1枚もなければ「No Data Found」カードを1枚返す。

use crate::catalog::{ordered_catalog, Icon};
use crate::result::{FieldValue, ParseResult};
use serde::Serialize;

/// フォールバックカードの見出し
pub const NO_DATA_TITLE: &str = "No Data Found";

/// フォールバックカードの本文
pub const NO_DATA_MESSAGE: &str = "No information could be extracted from the resume.";

/// カード本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum CardContent {
    /// 改行ごとに分割した文章
    Lines(Vec<String>),
    /// 箇条書き（入力順）
    Items(Vec<String>),
}

/// 表示カード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub icon: Icon,
    pub content: CardContent,
}

impl Card {
    fn from_value(title: &str, icon: Icon, value: &FieldValue) -> Self {
        let content = match value {
            FieldValue::List(items) => CardContent::Items(items.clone()),
            FieldValue::Text(text) => CardContent::Lines(text.split('\n').map(str::to_string).collect()),
        };
        Self {
            title: title.to_string(),
            icon,
            content,
        }
    }

    fn no_data() -> Self {
        Self {
            title: NO_DATA_TITLE.to_string(),
            icon: Icon::Warning,
            content: CardContent::Lines(vec![NO_DATA_MESSAGE.to_string()]),
        }
    }

    /// フォールバックカードか
    pub fn is_no_data(&self) -> bool {
        self.title == NO_DATA_TITLE && self.icon == Icon::Warning
    }
}

/// 解析結果をカード列に変換
pub fn render(result: &ParseResult) -> Vec<Card> {
    let mut cards: Vec<Card> = ordered_catalog()
        .iter()
        .filter_map(|spec| {
            result
                .present(spec.key)
                .map(|value| Card::from_value(spec.title, spec.icon, value))
        })
        .collect();

    if cards.is_empty() {
        cards.push(Card::no_data());
    }

    cards
}
