//! # Widget Error Type
//!
//! Unified error type for the widget's host boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Minicart                           │
//! │                                                                         │
//! │  Minicart::mount(config, cart)                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Config invalid? ─── CoreError::InvalidConfig ──┐                      │
//! │         │                                       │                       │
//! │         ▼                                       ▼                       │
//! │  JSON malformed? ─── serde_json::Error ───── WidgetError ────► host    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Mounted: interaction, counting and rendering cannot fail              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The host receives a machine-readable `code` and a human-readable `message`:
//! ```json
//! {
//!   "code": "INVALID_CONFIG",
//!   "message": "Invalid minicart configuration: maxDrawerWidth must be positive"
//! }
//! ```

use serde::Serialize;
use minicart_core::{CoreError, ValidationError};

/// Error returned across the widget boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Configuration rejected at mount
    InvalidConfig,

    /// Host sent a document we could not parse
    MalformedInput,

    /// Reading input failed (preview binary)
    Io,
}

/// Convenience type alias for widget results.
pub type WidgetResult<T> = Result<T, WidgetError>;

impl WidgetError {
    /// Creates a new widget error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        WidgetError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        WidgetError::new(ErrorCode::InvalidConfig, message)
    }

    /// Creates a malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        WidgetError::new(ErrorCode::MalformedInput, message)
    }
}

impl From<CoreError> for WidgetError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidConfig(_) => WidgetError::invalid_config(err.to_string()),
        }
    }
}

impl From<ValidationError> for WidgetError {
    fn from(err: ValidationError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!(error = %err, "Rejected malformed JSON input");
        WidgetError::malformed(err.to_string())
    }
}

impl From<std::io::Error> for WidgetError {
    fn from(err: std::io::Error) -> Self {
        WidgetError::new(ErrorCode::Io, err.to_string())
    }
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for WidgetError {}
