//! # Error Types
//!
//! Domain-specific error types for minicart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  minicart-core errors (this file)                                      │
//! │  ├── CoreError        - Configuration rejected by the core             │
//! │  └── ValidationError  - Individual value validation failures           │
//! │                                                                         │
//! │  storefront-widget errors (in app)                                     │
//! │  └── WidgetError      - What the host sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → WidgetError → Host                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The state machine, counting and variation routing never fail. Errors only
//! exist at the configuration boundary.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration field was rejected.
    ///
    /// ## When This Occurs
    /// - `checkoutUrl` or `linkVariationUrl` is blank
    /// - `maxDrawerWidth` is zero pixels or a blank string
    /// - A custom pixel event id or name is too long
    #[error("Invalid minicart configuration: {0}")]
    InvalidConfig(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
