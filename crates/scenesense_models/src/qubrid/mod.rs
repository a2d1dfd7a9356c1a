//! Qubrid chat-completions integration.

mod driver;
mod envelope;

pub use driver::QubridDriver;
pub use envelope::reply_text_from_body;
