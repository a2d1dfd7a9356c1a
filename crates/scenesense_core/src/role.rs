//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a chat message, serialized the way chat-completion APIs expect.
///
/// # Examples
///
/// ```
/// use scenesense_core::Role;
///
/// assert_ne!(Role::User, Role::System);
/// assert_eq!(format!("{}", Role::System), "system");
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
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages carry the prompt
    #[display("user")]
    User,
    /// Assistant messages are from the model
    #[display("assistant")]
    Assistant,
}
