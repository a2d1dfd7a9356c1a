//! Core type definitions for the SceneSense interface.

use serde::{Deserialize, Serialize};

/// The backends a model identifier can route to.
///
/// # Examples
///
/// ```
/// use scenesense_interface::ProviderKind;
///
/// assert_eq!(ProviderKind::Qubrid.name(), "qubrid");
/// assert_eq!(ProviderKind::Groq.credential_var(), "GROQ_API_KEY");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Primary backend, serves every model not reserved elsewhere
    #[display("groq")]
    Groq,
    /// Alternate HTTP backend, serves the reserved model identifier
    #[display("qubrid")]
    Qubrid,
}

impl ProviderKind {
    /// Lowercase provider name.
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Groq => "groq",
            ProviderKind::Qubrid => "qubrid",
        }
    }

    /// Environment variable holding this provider's credential.
    pub fn credential_var(self) -> &'static str {
        match self {
            ProviderKind::Groq => scenesense_core::Credentials::GROQ_API_KEY,
            ProviderKind::Qubrid => scenesense_core::Credentials::QUBRID_API_KEY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_provider_has_distinct_credential() {
        let vars: Vec<_> = ProviderKind::iter().map(ProviderKind::credential_var).collect();
        assert_eq!(vars, vec!["GROQ_API_KEY", "QUBRID_API_KEY"]);
    }

    #[test]
    fn test_name_matches_display() {
        for provider in ProviderKind::iter() {
            assert_eq!(provider.name(), provider.to_string());
        }
    }
}
