//! Coercion of loosely typed model output into bounded domain values.
//!
//! Models return numbers as numbers, as strings, occasionally as booleans.
//! These functions accept any JSON value and never fail: unusable input
//! yields the caller's default.

use serde_json::Value;

/// Intensity used when the model gives nothing usable.
pub const DEFAULT_INTENSITY: i64 = 5;

/// Confidence used when the model gives nothing usable.
pub const DEFAULT_CONFIDENCE: f64 = 0.75;

/// Hex color substituted for anything that is not `#` plus six characters.
pub const FALLBACK_HEX: &str = "#111111";

/// Coerce `value` to an integer intensity in `[1, 10]`.
///
/// Floats truncate toward zero, numeric strings are parsed, booleans count as
/// 1 or 0. Anything else returns `default` unclamped.
///
/// # Examples
///
/// ```
/// use scenesense_director::clamp_intensity;
/// use serde_json::json;
///
/// assert_eq!(clamp_intensity(&json!(7), 5), 7);
/// assert_eq!(clamp_intensity(&json!(42), 5), 10);
/// assert_eq!(clamp_intensity(&json!(" 3 "), 5), 3);
/// assert_eq!(clamp_intensity(&json!(8.9), 5), 8);
/// assert_eq!(clamp_intensity(&json!("high"), 5), 5);
/// ```
pub fn clamp_intensity(value: &Value, default: i64) -> i64 {
    let parsed = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().and_then(truncate),
        },
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    match parsed {
        Some(v) => v.clamp(1, 10),
        None => default,
    }
}

fn truncate(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    // Saturating cast; the clamp to [1, 10] follows.
    Some(f.trunc() as i64)
}

/// Coerce `value` to a confidence in `[0.0, 1.0]`.
///
/// Numeric strings are parsed, booleans count as 1.0 or 0.0. Anything else,
/// including NaN, returns `default` unclamped.
///
/// # Examples
///
/// ```
/// use scenesense_director::clamp_confidence;
/// use serde_json::json;
///
/// assert_eq!(clamp_confidence(&json!(0.9), 0.75), 0.9);
/// assert_eq!(clamp_confidence(&json!(3), 0.75), 1.0);
/// assert_eq!(clamp_confidence(&json!("-0.2"), 0.75), 0.0);
/// assert_eq!(clamp_confidence(&json!(null), 0.75), 0.75);
/// ```
pub fn clamp_confidence(value: &Value, default: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    match parsed {
        Some(v) if !v.is_nan() => v.clamp(0.0, 1.0),
        _ => default,
    }
}

/// Normalize a hex color to `#RRGGBB` form.
///
/// Trims whitespace, adds a missing `#`, and expands `#RGB` shorthand.
/// Characters are not checked for being hex digits; only the length is.
///
/// # Examples
///
/// ```
/// use scenesense_director::normalize_hex;
///
/// assert_eq!(normalize_hex("abc"), "#aabbcc");
/// assert_eq!(normalize_hex(" #1A2B3C "), "#1A2B3C");
/// assert_eq!(normalize_hex(""), "#111111");
/// assert_eq!(normalize_hex("#12345"), "#111111");
/// ```
pub fn normalize_hex(hex: &str) -> String {
    let trimmed = hex.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let digits: Vec<char> = body.chars().collect();
    match digits.len() {
        3 => std::iter::once('#')
            .chain(digits.iter().flat_map(|c| [*c, *c]))
            .collect(),
        6 => format!("#{}", body),
        _ => FALLBACK_HEX.to_string(),
    }
}
