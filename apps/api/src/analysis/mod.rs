//! Resume analysis and career chat.
//!
//! Everything here talks to the model through the `Assistant` capability and degrades to
//! canned output when the model is unavailable, so none of these paths fail on LLM errors.

pub mod analyzer;
pub mod chat;
pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod report;
