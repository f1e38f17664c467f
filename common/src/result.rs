//! 解析結果の型定義
//!
//! サービスが返すJSONオブジェクトは、どのキーが含まれるか保証されない。
//! 値は文字列または文字列配列で、空文字列・空配列は「データなし」として扱う。

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// フィールド値
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// JSON値から変換
    ///
    /// 文字列と配列以外（null・数値・真偽値・オブジェクト）は値なしとみなす。
    /// 配列要素の文字列以外はJSON表記のまま文字列化する。
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Array(items) => Some(FieldValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            _ => None,
        }
    }

    /// 表示対象となる値か
    ///
    /// 空でない配列、または前後の空白を除いて空でない文字列のみ。
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::List(items) => !items.is_empty(),
        }
    }
}

/// 1回のアップロードで得られた解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParseResult {
    fields: BTreeMap<String, FieldValue>,
}

impl ParseResult {
    /// JSONオブジェクトから作成
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .filter_map(|(key, value)| FieldValue::from_json(value).map(|v| (key.clone(), v)))
            .collect();
        Self { fields }
    }

    /// 生の値を取得（空でも返す）
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// 表示対象の値のみ取得
    pub fn present(&self, key: &str) -> Option<&FieldValue> {
        self.get(key).filter(|v| v.is_present())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// キーと値の一覧（キー順）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FieldValue)> for ParseResult {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_from(value: Value) -> ParseResult {
        ParseResult::from_map(value.as_object().expect("オブジェクトではない"))
    }

    #[test]
    fn test_is_present_text() {
        assert!(FieldValue::Text("Jane".to_string()).is_present());
        assert!(FieldValue::Text("  x  ".to_string()).is_present());
        assert!(!FieldValue::Text(String::new()).is_present());
        assert!(!FieldValue::Text(" \n\t ".to_string()).is_present());
    }

    #[test]
    fn test_is_present_list() {
        assert!(FieldValue::List(vec!["Rust".to_string()]).is_present());
        // 空白のみの要素でも配列が空でなければ表示対象
        assert!(FieldValue::List(vec![" ".to_string()]).is_present());
        assert!(!FieldValue::List(vec![]).is_present());
    }

    #[test]
    fn test_from_json_ignores_non_text_values() {
        assert_eq!(FieldValue::from_json(&Value::Null), None);
        assert_eq!(FieldValue::from_json(&json!(42)), None);
        assert_eq!(FieldValue::from_json(&json!(true)), None);
        assert_eq!(FieldValue::from_json(&json!({"a": 1})), None);
    }

    #[test]
    fn test_from_json_stringifies_list_items() {
        let value = FieldValue::from_json(&json!(["Go", 3, null])).expect("変換失敗");
        assert_eq!(
            value,
            FieldValue::List(vec!["Go".to_string(), "3".to_string(), "null".to_string()])
        );
    }

    #[test]
    fn test_parse_result_present() {
        let result = result_from(json!({
            "name": "Jane Doe",
            "about": "   ",
            "skills": [],
            "email_id": null,
            "projects": ["A"]
        }));

        assert!(result.present("name").is_some());
        assert!(result.present("about").is_none());
        assert!(result.get("about").is_some());
        assert!(result.present("skills").is_none());
        assert!(result.get("email_id").is_none());
        assert!(result.present("projects").is_some());
        assert!(result.present("missing").is_none());
    }

    #[test]
    fn test_parse_result_serialize() {
        let result = result_from(json!({"name": "Jane", "skills": ["Rust", "Go"], "age": 30}));
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"name":"Jane","skills":["Rust","Go"]}"#);
    }

    #[test]
    fn test_parse_result_from_iter() {
        let result: ParseResult = vec![("name".to_string(), FieldValue::Text("A".to_string()))]
            .into_iter()
            .collect();
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
        assert_eq!(result.iter().next().map(|(k, _)| k), Some("name"));
    }
}
