//! Operating mode for scene analysis.

use serde::{Deserialize, Serialize};

/// Tunes shot-count expectations and writer-notes verbosity in the prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Mode {
    /// Camera-first analysis: 5 to 8 shots, brief writer notes
    #[default]
    #[display("director")]
    Director,
    /// Story-first analysis: 3 to 5 shots, rich writer notes
    #[display("writer")]
    Writer,
}

impl Mode {
    /// Parse a mode name, treating anything other than `"writer"` as director.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenesense_core::Mode;
    ///
    /// assert_eq!(Mode::from_str_lenient("writer"), Mode::Writer);
    /// assert_eq!(Mode::from_str_lenient("director"), Mode::Director);
    /// assert_eq!(Mode::from_str_lenient("Writer"), Mode::Director);
    /// assert_eq!(Mode::from_str_lenient("cinematographer"), Mode::Director);
    /// ```
    pub fn from_str_lenient(value: &str) -> Self {
        if value == "writer" {
            Mode::Writer
        } else {
            Mode::Director
        }
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        Self::from_str_lenient(&value)
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        Self::from_str_lenient(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_round_trips_through_lenient_parse() {
        for mode in Mode::iter() {
            assert_eq!(Mode::from_str_lenient(&mode.to_string()), mode);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let names: Vec<String> = Mode::iter()
            .map(|m| serde_json::to_string(&m).unwrap())
            .collect();
        assert_eq!(names, vec!["\"director\"", "\"writer\""]);
    }

    #[test]
    fn test_deserialize_unknown_mode_as_director() {
        for raw in ["\"cinematographer\"", "\"Writer\"", "\"\""] {
            let mode: Mode = serde_json::from_str(raw).unwrap();
            assert_eq!(mode, Mode::Director, "{}", raw);
        }
        let mode: Mode = serde_json::from_str("\"writer\"").unwrap();
        assert_eq!(mode, Mode::Writer);
    }
}
