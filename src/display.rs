//! カードの端末表示

use resume_parser_common::{Card, CardContent};
use std::fmt::Write;

/// カード1枚を文字列化
pub fn format_card(card: &Card) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", card.icon.glyph(), card.title);
    match &card.content {
        CardContent::Lines(lines) => {
            for line in lines {
                let _ = writeln!(out, "   {}", line);
            }
        }
        CardContent::Items(items) => {
            for item in items {
                let _ = writeln!(out, "   • {}", item);
            }
        }
    }
    out
}

/// カード列を空行区切りで文字列化
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("\n")
}
