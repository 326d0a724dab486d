//! Validation building blocks and the messages they report.

pub mod error_messages;
pub mod validation;
