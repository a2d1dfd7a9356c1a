//! Typed views over analysis and risk replies.

use crate::JsonMap;
use crate::normalize::{
    DEFAULT_CONFIDENCE, DEFAULT_INTENSITY, clamp_confidence, clamp_intensity, normalize_hex,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scene analysis mapping as recovered from the model.
///
/// The mapping is schema-guided, not schema-enforced: every key is optional.
/// Accessors read through the normalizers and never fail.
///
/// # Examples
///
/// ```
/// use scenesense_director::{AnalysisResult, extract_json_loose};
///
/// let map = extract_json_loose(r#"{"intensity": "12", "confidence": 0.4}"#).unwrap();
/// let result = AnalysisResult::new(map);
/// assert_eq!(result.intensity(), Some(10));
/// assert_eq!(result.confidence(), Some(0.4));
/// assert!(result.shot_list().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(JsonMap);

impl AnalysisResult {
    /// Wrap a recovered mapping.
    pub fn new(map: JsonMap) -> Self {
        Self(map)
    }

    /// The underlying mapping.
    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }

    /// Take the underlying mapping.
    pub fn into_inner(self) -> JsonMap {
        self.0
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Dominant emotion.
    pub fn emotion(&self) -> Option<&str> {
        self.get_str("emotion")
    }

    /// Genre label.
    pub fn genre(&self) -> Option<&str> {
        self.get_str("genre")
    }

    /// Tone label.
    pub fn tone(&self) -> Option<&str> {
        self.get_str("tone")
    }

    /// Story purpose of the scene.
    pub fn narrative_purpose(&self) -> Option<&str> {
        self.get_str("narrative_purpose")
    }

    /// Lighting and atmosphere.
    pub fn visual_mood(&self) -> Option<&str> {
        self.get_str("visual_mood")
    }

    /// Movement and framing guidance.
    pub fn camera_style(&self) -> Option<&str> {
        self.get_str("camera_style")
    }

    /// Intensity clamped to `[1, 10]`; `None` when the key is absent.
    pub fn intensity(&self) -> Option<i64> {
        self.get("intensity")
            .map(|v| clamp_intensity(v, DEFAULT_INTENSITY))
    }

    /// Confidence clamped to `[0, 1]`; `None` when the key is absent.
    pub fn confidence(&self) -> Option<f64> {
        self.get("confidence")
            .map(|v| clamp_confidence(v, DEFAULT_CONFIDENCE))
    }

    /// Palette entries with normalized hex codes. Non-object entries are skipped.
    pub fn color_palette(&self) -> Vec<ColorSwatch> {
        self.array("color_palette")
            .iter()
            .filter_map(Value::as_object)
            .map(ColorSwatch::from_map)
            .collect()
    }

    /// Shot descriptors, in order.
    pub fn shot_list(&self) -> &[Value] {
        self.array("shot_list")
    }

    /// Storyboard prompts that are strings.
    pub fn storyboard_prompts(&self) -> Vec<&str> {
        self.array("storyboard_prompts")
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }

    /// Writer notes mapping.
    pub fn writer_notes(&self) -> Option<&JsonMap> {
        self.get("writer_notes").and_then(Value::as_object)
    }

    fn array(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl From<JsonMap> for AnalysisResult {
    fn from(map: JsonMap) -> Self {
        Self::new(map)
    }
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ColorSwatch {
    /// Color name
    name: String,
    /// `#RRGGBB`, or the fallback when the model gave something unusable
    hex: String,
    /// Where the color is used
    usage: String,
}

impl ColorSwatch {
    fn from_map(map: &JsonMap) -> Self {
        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            name: text("name"),
            hex: normalize_hex(&text("hex")),
            usage: text("usage"),
        }
    }
}

/// Copy legacy `shots` into `shot_list` when `shot_list` is absent.
///
/// The original key is kept.
///
/// # Examples
///
/// ```
/// use scenesense_director::{apply_key_aliases, extract_json_loose};
///
/// let mut map = extract_json_loose(r#"{"shots": [1, 2]}"#).unwrap();
/// apply_key_aliases(&mut map);
/// assert_eq!(map["shot_list"], map["shots"]);
/// ```
pub fn apply_key_aliases(map: &mut JsonMap) {
    if map.contains_key("shot_list") {
        return;
    }
    if let Some(shots) = map.get("shots").cloned() {
        map.insert("shot_list".to_string(), shots);
    }
}

/// One production risk found in a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct DetectedRisk {
    /// Risk category
    factor: String,
    /// Low, Medium or High
    severity: String,
    /// Why it is risky
    reason: String,
}

/// Production risk assessment.
///
/// Missing fields take defaults; a present field of the wrong shape fails
/// deserialization.
///
/// # Examples
///
/// ```
/// use scenesense_director::RiskResult;
///
/// let sentinel = RiskResult::unknown("connection refused");
/// assert!(sentinel.is_unknown());
/// assert_eq!(*sentinel.confidence(), 0.0);
/// assert_eq!(sentinel.justification(), "Error analyzing risk: connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct RiskResult {
    /// Low, Medium, High, or Unknown for the sentinel
    overall_risk_level: String,
    /// Risks found, in the order the model listed them
    detected_risks: Vec<DetectedRisk>,
    /// Overall reasoning
    justification: String,
    /// Practical mitigations
    mitigation_suggestions: Vec<String>,
    /// Confidence in `[0, 1]`
    confidence: f64,
}

impl RiskResult {
    /// Level reported by the sentinel.
    pub const UNKNOWN_LEVEL: &'static str = "Unknown";

    /// The fail-safe sentinel carrying `error` in its justification.
    pub fn unknown(error: impl std::fmt::Display) -> Self {
        Self {
            overall_risk_level: Self::UNKNOWN_LEVEL.to_string(),
            detected_risks: Vec::new(),
            justification: format!("Error analyzing risk: {}", error),
            mitigation_suggestions: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Whether this is the sentinel level.
    pub fn is_unknown(&self) -> bool {
        self.overall_risk_level == Self::UNKNOWN_LEVEL
    }

    /// Clamp confidence into `[0, 1]`.
    pub fn normalized(mut self) -> Self {
        self.confidence = clamp_confidence(&Value::from(self.confidence), 0.0);
        self
    }
}

impl Default for RiskResult {
    fn default() -> Self {
        Self {
            overall_risk_level: Self::UNKNOWN_LEVEL.to_string(),
            detected_risks: Vec::new(),
            justification: String::new(),
            mitigation_suggestions: Vec::new(),
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> JsonMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_alias_copies_shots() {
        let mut m = map(json!({"shots": [{"shot_number": 1}]}));
        apply_key_aliases(&mut m);
        assert_eq!(m["shot_list"], json!([{"shot_number": 1}]));
        assert!(m.contains_key("shots"));
    }

    #[test]
    fn test_alias_keeps_existing_shot_list() {
        let mut m = map(json!({"shots": [1], "shot_list": [2]}));
        apply_key_aliases(&mut m);
        assert_eq!(m["shot_list"], json!([2]));
    }

    #[test]
    fn test_alias_without_shots_is_noop() {
        let mut m = map(json!({"emotion": "tense"}));
        apply_key_aliases(&mut m);
        assert!(!m.contains_key("shot_list"));
    }

    #[test]
    fn test_accessors_on_empty_result() {
        let result = AnalysisResult::default();
        assert_eq!(result.intensity(), None);
        assert_eq!(result.confidence(), None);
        assert!(result.color_palette().is_empty());
        assert!(result.shot_list().is_empty());
        assert!(result.storyboard_prompts().is_empty());
        assert!(result.writer_notes().is_none());
        assert!(result.emotion().is_none());
    }

    #[test]
    fn test_palette_normalizes_hex() {
        let result = AnalysisResult::new(map(json!({
            "color_palette": [
                {"name": "Rust", "hex": "b7410e", "usage": "walls"},
                {"name": "Ink", "hex": "#012", "usage": "shadows"},
                {"name": "Bad", "hex": "#12345"},
                "not an object"
            ]
        })));
        let palette = result.color_palette();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0].hex(), "#b7410e");
        assert_eq!(palette[1].hex(), "#001122");
        assert_eq!(palette[2].hex(), "#111111");
        assert_eq!(palette[2].usage(), "");
    }

    #[test]
    fn test_wrongly_typed_fields_are_absent() {
        let result = AnalysisResult::new(map(json!({
            "emotion": 3,
            "shot_list": "one wide shot",
            "writer_notes": ["a"],
            "storyboard_prompts": ["wide", 2, "close"]
        })));
        assert!(result.emotion().is_none());
        assert!(result.shot_list().is_empty());
        assert!(result.writer_notes().is_none());
        assert_eq!(result.storyboard_prompts(), vec!["wide", "close"]);
    }

    #[test]
    fn test_serializes_as_plain_mapping() {
        let result = AnalysisResult::new(map(json!({"tone": "bleak"})));
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"tone": "bleak"}));
    }

    #[test]
    fn test_risk_defaults_for_missing_fields() {
        let risk: RiskResult = serde_json::from_value(json!({"overall_risk_level": "High"})).unwrap();
        assert_eq!(risk.overall_risk_level(), "High");
        assert!(risk.detected_risks().is_empty());
        assert_eq!(*risk.confidence(), 0.0);
    }

    #[test]
    fn test_risk_wrong_shape_fails() {
        let parsed = serde_json::from_value::<RiskResult>(json!({"detected_risks": "none"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_risk_normalized_clamps_confidence() {
        let risk: RiskResult = serde_json::from_value(json!({"confidence": 1.7})).unwrap();
        assert_eq!(*risk.normalized().confidence(), 1.0);
    }

    #[test]
    fn test_sentinel_shape() {
        let sentinel = RiskResult::unknown("boom");
        assert_eq!(sentinel.overall_risk_level(), "Unknown");
        assert!(sentinel.detected_risks().is_empty());
        assert!(sentinel.mitigation_suggestions().is_empty());
        assert_eq!(*sentinel.confidence(), 0.0);
        assert!(sentinel.justification().contains("boom"));
    }
}
