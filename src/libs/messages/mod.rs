//! User-facing messages.
//!
//! [`Message`] enumerates every piece of text tempi shows; its `Display`
//! implementation in [`display`] holds the wording and [`macros`] routes it to
//! the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
