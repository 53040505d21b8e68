//! Theme error types

use thiserror::Error;

/// Errors raised by the color-mode subsystem
///
/// `get`/`set` on the preference service never surface these; they are
/// recovered locally by falling back to the next source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The durable key-value store is disabled, full, or absent
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// A persisted or observed value is not a member of the enumeration
    #[error("invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
