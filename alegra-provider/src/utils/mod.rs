//! Utility modules.

/// Lenient serde helpers for vendor payload scalars.
pub mod lenient;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
