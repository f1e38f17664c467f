//! アップロードレスポンスの解釈
//!
//! ブラウザ（fetch）とCLI（reqwest）で共通。
//! HTTPステータス → JSON → `error` フィールド の順に判定する。

use crate::error::{Error, Result};
use crate::result::ParseResult;
use serde_json::Value;

/// ステータスと本文から解析結果を取り出す
pub fn interpret_response(status: u16, body: &str) -> Result<ParseResult> {
    if !(200..300).contains(&status) {
        tracing::debug!(status, "upload rejected by transport");
        return Err(Error::Transport(status));
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    let Some(map) = value.as_object() else {
        return Err(Error::MalformedResponse("JSON object not found".to_string()));
    };

    if let Some(message) = map.get("error").and_then(service_error_message) {
        tracing::debug!(%message, "service reported an error");
        return Err(Error::Service(message));
    }

    let result = ParseResult::from_map(map);
    tracing::debug!(fields = result.len(), "parse result received");
    Ok(result)
}

/// `error` フィールドが真値ならメッセージを返す
///
/// null・false・0・空文字列はエラーなしとみなす。
fn service_error_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn test_success_response() {
        let result = interpret_response(200, r#"{"name":"Jane Doe","email_id":"jane@x.com"}"#)
            .expect("解釈失敗");
        let cards = render(&result);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Name");
        assert_eq!(cards[1].title, "Email");
    }

    #[test]
    fn test_non_success_status() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, Error::Transport(500));
        assert!(err.user_message().contains("500"));

        let err = interpret_response(404, r#"{"name":"x"}"#).unwrap_err();
        assert_eq!(err, Error::Transport(404));
    }

    #[test]
    fn test_other_2xx_accepted() {
        assert!(interpret_response(201, r#"{"name":"x"}"#).is_ok());
    }

    #[test]
    fn test_service_error_on_200() {
        let err = interpret_response(200, r#"{"error":"unsupported document"}"#).unwrap_err();
        assert_eq!(err, Error::Service("unsupported document".to_string()));
        assert_eq!(err.user_message(), "unsupported document");
    }

    #[test]
    fn test_falsy_error_field_is_ignored() {
        for body in [
            r#"{"error":null,"name":"A"}"#,
            r#"{"error":"","name":"A"}"#,
            r#"{"error":false,"name":"A"}"#,
            r#"{"error":0,"name":"A"}"#,
        ] {
            let result = interpret_response(200, body).expect(body);
            assert!(result.present("name").is_some(), "{}", body);
        }
    }

    #[test]
    fn test_non_string_error_field() {
        let err = interpret_response(200, r#"{"error":{"code":7}}"#).unwrap_err();
        assert_eq!(err, Error::Service(r#"{"code":7}"#.to_string()));
    }

    #[test]
    fn test_invalid_json() {
        let err = interpret_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
        assert_eq!(err.user_message(), crate::error::GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_non_object_json() {
        for body in ["[]", "null", "\"text\"", "42"] {
            let err = interpret_response(200, body).unwrap_err();
            assert!(matches!(err, Error::MalformedResponse(_)), "{}", body);
        }
    }

    #[test]
    fn test_empty_object_renders_fallback() {
        let result = interpret_response(200, "{}").expect("解釈失敗");
        let cards = render(&result);
        assert_eq!(cards.len(), 1);
        assert!(cards[0].is_no_data());
    }
}
