//! Reply text recovery from Qubrid response bodies.

use scenesense_error::ProviderErrorKind;
use serde_json::Value;

/// Pull the reply text out of a successful Qubrid response.
///
/// - JSON bodies with a non-empty `choices` array yield
///   `choices[0].message.content`.
/// - JSON bodies without choices are returned re-serialized, so a model that
///   answered with the analysis object itself still reaches the extractor.
/// - Any other content type is returned verbatim.
///
/// # Errors
///
/// Returns [`ProviderErrorKind::ResponseParsing`] when a body labeled JSON is
/// not JSON, or when the first choice carries no string content.
///
/// # Examples
///
/// ```
/// use scenesense_models::reply_text_from_body;
///
/// let body = r#"{"choices":[{"message":{"content":"{\"tone\":\"bleak\"}"}}]}"#;
/// let text = reply_text_from_body("application/json; charset=utf-8", body).unwrap();
/// assert_eq!(text, r#"{"tone":"bleak"}"#);
///
/// let text = reply_text_from_body("text/plain", "```json\n{}\n```").unwrap();
/// assert_eq!(text, "```json\n{}\n```");
/// ```
pub fn reply_text_from_body(content_type: &str, body: &str) -> Result<String, ProviderErrorKind> {
    if !content_type.contains("application/json") {
        return Ok(body.to_string());
    }

    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| ProviderErrorKind::ResponseParsing(e.to_string()))?;

    match envelope.get("choices").and_then(Value::as_array) {
        Some(choices) if !choices.is_empty() => choices[0]
            .pointer("/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderErrorKind::ResponseParsing(
                    "choices[0].message.content missing or not a string".to_string(),
                )
            }),
        _ => Ok(envelope.to_string()),
    }
}
