//! Lenient recovery of a JSON object from free-form model text.
//!
//! Models asked for "JSON only" still wrap it in code fences, prefix it with
//! prose, or leave trailing commas behind. [`extract_json_loose`] strips the
//! fences and then runs a fixed list of strategies, returning the first
//! object any of them yields.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// A parsed JSON object.
pub type JsonMap = Map<String, Value>;

// Both patterns are literals known to compile.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(json)?").expect("valid code fence pattern"));

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("valid trailing comma pattern"));

type Strategy = fn(&str) -> Option<JsonMap>;

/// Tried in order on the fence-stripped text; first success wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", parse_direct),
    ("outermost_braces", parse_outermost_braces),
    ("trailing_comma_repair", parse_repaired),
];

/// Recover a JSON object from model text.
///
/// Returns `None` for empty input or when no strategy yields an object.
///
/// # Examples
///
/// ```
/// use scenesense_director::extract_json_loose;
/// use serde_json::json;
///
/// let fenced = "```json\n{\"a\":1}\n```";
/// assert_eq!(extract_json_loose(fenced).unwrap()["a"], json!(1));
///
/// let sloppy = r#"Here is your answer: {"a":1, "b":[1,2,],}"#;
/// let map = extract_json_loose(sloppy).unwrap();
/// assert_eq!(map["b"], json!([1, 2]));
///
/// assert!(extract_json_loose("not json at all").is_none());
/// assert!(extract_json_loose("").is_none());
/// ```
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_json_loose(text: &str) -> Option<JsonMap> {
    if text.is_empty() {
        return None;
    }

    let cleaned = strip_code_fences(text);
    let found = STRATEGIES.iter().find_map(|(name, strategy)| {
        let map = strategy(&cleaned)?;
        debug!(strategy = *name, keys = map.len(), "Recovered JSON object");
        Some(map)
    });

    if found.is_none() {
        debug!("No JSON object recovered");
    }
    found
}

/// Remove code-fence markers (```` ``` ```` with an optional `json` tag, any
/// case) and trim backticks and whitespace from both ends.
///
/// # Examples
///
/// ```
/// use scenesense_director::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```JSON\n{}\n```"), "{}");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE
        .replace_all(text, "")
        .trim_matches(|c| matches!(c, '`' | ' ' | '\n' | '\t'))
        .to_string()
}

/// Slice from the first `{` to the last `}`, if both exist in that order.
///
/// # Examples
///
/// ```
/// use scenesense_director::outermost_braces;
///
/// assert_eq!(outermost_braces("x {\"a\": {}} y"), Some("{\"a\": {}}"));
/// assert_eq!(outermost_braces("} {"), None);
/// ```
pub fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Drop every comma that directly precedes (modulo whitespace) a `}` or `]`.
///
/// # Examples
///
/// ```
/// use scenesense_director::remove_trailing_commas;
///
/// assert_eq!(remove_trailing_commas("[1,2, ]"), "[1,2 ]");
/// ```
pub fn remove_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "$1").into_owned()
}

fn parse_object(text: &str) -> Option<JsonMap> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn parse_direct(text: &str) -> Option<JsonMap> {
    parse_object(text)
}

fn parse_outermost_braces(text: &str) -> Option<JsonMap> {
    outermost_braces(text).and_then(parse_object)
}

fn parse_repaired(text: &str) -> Option<JsonMap> {
    outermost_braces(text).and_then(|blob| parse_object(&remove_trailing_commas(blob)))
}
