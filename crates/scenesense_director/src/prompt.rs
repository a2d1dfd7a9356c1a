//! Prompt templates for scene and risk analysis.
//!
//! Rendering is a pure function of its inputs: no timestamps, no randomness.

use scenesense_core::Mode;

/// System message sent with every scene analysis request.
pub const STRICT_JSON_DIRECTIVE: &str = "You return strict JSON only.";

/// System message for provider health pings.
pub const PING_SYSTEM_DIRECTIVE: &str = "Reply ONLY with the word OK.";

/// User message for provider health pings.
pub const PING_USER_TEXT: &str = "Test";

const ANALYSIS_SCHEMA: &str = r##"{
  "mode": "director|writer",
  "emotion": "string",
  "genre": "string",
  "tone": "string",
  "intensity": "integer 1-10",
  "narrative_purpose": "string",
  "visual_mood": "string",
  "camera_style": "string",
  "color_palette": [
    {
      "name": "string",
      "hex": "#RRGGBB",
      "usage": "string"
    }
  ],
  "shot_list": [
    {
      "shot_number": "int",
      "shot_type": "string (Wide/Medium/Close-up/OTS/POV etc.)",
      "camera_movement": "string",
      "framing": "string",
      "lighting": "string",
      "purpose": "string"
    }
  ],
  "storyboard_prompts": [
    "string",
    "string",
    "string"
  ],
  "writer_notes": {
    "emotional_beat": "string",
    "subtext": "string",
    "dialogue_suggestions": [
      "string"
    ]
  },
  "confidence": "float 0-1"
}"##;

fn shot_directive(mode: Mode) -> &'static str {
    match mode {
        Mode::Director => "Provide 5 to 8 shots in shot_list.",
        Mode::Writer => "Provide 3 to 5 shots in shot_list.",
    }
}

fn writer_notes_directive(mode: Mode) -> &'static str {
    match mode {
        Mode::Director => "Include writer_notes but keep it brief.",
        Mode::Writer => "Include writer_notes with rich content.",
    }
}

/// Render the scene analysis instruction for `mode`.
///
/// The scene is embedded verbatim; only trailing whitespace of the whole
/// prompt is dropped.
///
/// # Examples
///
/// ```
/// use scenesense_core::Mode;
/// use scenesense_director::build_prompt;
///
/// let prompt = build_prompt("INT. KITCHEN - DAY", Mode::Writer);
/// assert!(prompt.contains("Mode: writer"));
/// assert!(prompt.contains("Provide 3 to 5 shots in shot_list."));
/// assert!(prompt.ends_with("INT. KITCHEN - DAY"));
/// ```
pub fn build_prompt(scene_text: &str, mode: Mode) -> String {
    format!(
        "You are SceneSense AI. Analyze the screenplay scene and return ONLY valid JSON.
No markdown, no code fences, no extra commentary.

Mode: {mode}

Required behavior:
- emotion: concise (e.g., tense, intimate, hopeful, eerie)
- narrative_purpose: one strong sentence
- visual_mood: lighting + atmosphere in one sentence
- camera_style: movement/framing guidance in one sentence
- genre, tone, intensity(1-10) must be present
- color_palette: MUST be included. Provide exactly 3 cohesive colors with valid HEX codes.
- storyboard_prompts: exactly 3 cinematic prompts
- {shots}
- The 'shot_list' array is REQUIRED.
- confidence: 0-1
- {notes}

JSON schema (types guidance):
{schema}

Scene:
{scene}",
        mode = mode,
        shots = shot_directive(mode),
        notes = writer_notes_directive(mode),
        schema = ANALYSIS_SCHEMA,
        scene = scene_text,
    )
    .trim_end()
    .to_string()
}

/// Render the production-risk instruction.
///
/// Risk categories: crowd management, night shoots, weather dependency,
/// physical stunts, visual effects complexity.
pub fn build_risk_prompt(scene_text: &str) -> String {
    format!(
        r#"You are a film production safety and feasibility expert.

Analyze the following script scene from a production perspective.
Use reasoning, not keyword matching.

Identify risks related to:
- Crowd management
- Night shoots
- Weather dependency
- Physical stunts
- Visual effects complexity

For each detected risk:
- Explain why it is risky
- Assess severity realistically

Then provide:
- Overall risk level: Low / Medium / High
- Clear justification
- Practical mitigation suggestions

Return ONLY valid JSON.
No markdown. No extra commentary.

JSON format:
{{
  "overall_risk_level": "Low/Medium/High",
  "detected_risks": [
    {{
      "factor": "Risk Factor Name",
      "severity": "Low/Medium/High",
      "reason": "Explanation"
    }}
  ],
  "justification": "Overall reasoning",
  "mitigation_suggestions": ["Suggestion 1", "Suggestion 2"],
  "confidence": 0.0
}}

Scene:
"""{scene}""""#,
        scene = scene_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = "EXT. MARKET CHASE - NIGHT\nRavi jumps from a rooftop.";

    #[test]
    fn test_director_directives() {
        let prompt = build_prompt(SCENE, Mode::Director);
        assert!(prompt.contains("Mode: director"));
        assert!(prompt.contains("Provide 5 to 8 shots in shot_list."));
        assert!(prompt.contains("Include writer_notes but keep it brief."));
        assert!(!prompt.contains("3 to 5 shots"));
    }

    #[test]
    fn test_writer_directives() {
        let prompt = build_prompt(SCENE, Mode::Writer);
        assert!(prompt.contains("Mode: writer"));
        assert!(prompt.contains("Provide 3 to 5 shots in shot_list."));
        assert!(prompt.contains("Include writer_notes with rich content."));
    }

    #[test]
    fn test_unknown_mode_matches_director() {
        for raw in ["", "Director", "WRITER", "cinematographer"] {
            let mode = Mode::from_str_lenient(raw);
            assert_eq!(
                build_prompt(SCENE, mode),
                build_prompt(SCENE, Mode::Director),
                "mode {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_prompt(SCENE, Mode::Writer),
            build_prompt(SCENE, Mode::Writer)
        );
    }

    #[test]
    fn test_schema_is_valid_json_with_expected_keys() {
        let schema: serde_json::Value = serde_json::from_str(ANALYSIS_SCHEMA).unwrap();
        for key in [
            "emotion",
            "intensity",
            "color_palette",
            "shot_list",
            "storyboard_prompts",
            "writer_notes",
            "confidence",
        ] {
            assert!(schema.get(key).is_some(), "missing {}", key);
        }
        assert!(build_prompt(SCENE, Mode::Director).contains(ANALYSIS_SCHEMA));
    }

    #[test]
    fn test_scene_embedded_verbatim() {
        assert!(build_prompt(SCENE, Mode::Director).ends_with(SCENE));

        let padded = "\n  EXT. MARKET CHASE - NIGHT\n\nA crowd.";
        let prompt = build_prompt(padded, Mode::Director);
        assert!(prompt.ends_with(&format!("Scene:\n{}", padded)));
    }

    #[test]
    fn test_trailing_whitespace_is_dropped() {
        let prompt = build_prompt("INT. VAN - DAY\n\n  ", Mode::Writer);
        assert!(prompt.ends_with("Scene:\nINT. VAN - DAY"));
    }

    #[test]
    fn test_risk_prompt_names_categories_and_scene() {
        let prompt = build_risk_prompt(SCENE);
        for category in [
            "Crowd management",
            "Night shoots",
            "Weather dependency",
            "Physical stunts",
            "Visual effects complexity",
        ] {
            assert!(prompt.contains(category), "missing {}", category);
        }
        assert!(prompt.contains(&format!("\"\"\"{}\"\"\"", SCENE)));
        assert!(prompt.contains("\"overall_risk_level\": \"Low/Medium/High\""));
    }
}
