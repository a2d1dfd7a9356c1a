//! Groq chat-completions integration.

mod driver;

pub use driver::GroqDriver;
