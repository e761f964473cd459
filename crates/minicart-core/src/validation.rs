//! # Validation Module
//!
//! Checks configuration values before the widget mounts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Enum values degrade to defaults, never fail                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── link URL present                                                  │
//! │  ├── drawer width present and non-zero                                 │
//! │  └── pixel identifiers                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minicart_core::validation::{validate_link_url, validate_drawer_width};
//! use minicart_core::DrawerWidth;
//!
//! assert!(validate_link_url("linkVariationUrl", "#/cart").is_ok());
//! assert!(validate_drawer_width(&DrawerWidth::Css("calc(100vw - 2rem)".into())).is_ok());
//! assert!(validate_drawer_width(&DrawerWidth::Pixels(0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::DrawerWidth;
use crate::MAX_PIXEL_IDENTIFIER_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a navigation target.
///
/// Any non-blank href is accepted as-is (relative paths, fragments and
/// query strings included); the browser resolves it.
pub fn validate_link_url(field: &str, url: &str) -> ValidationResult<()> {
    if url.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the maximum drawer width.
///
/// ## Rules
/// - Pixel widths must be positive
/// - CSS widths must not be blank; the value is passed to the renderer verbatim
pub fn validate_drawer_width(width: &DrawerWidth) -> ValidationResult<()> {
    const FIELD: &str = "maxDrawerWidth";

    match width {
        DrawerWidth::Pixels(0) => Err(ValidationError::MustBePositive {
            field: FIELD.to_string(),
        }),
        DrawerWidth::Pixels(_) => Ok(()),
        DrawerWidth::Css(css) if css.trim().is_empty() => Err(ValidationError::Required {
            field: FIELD.to_string(),
        }),
        DrawerWidth::Css(_) => Ok(()),
    }
}

/// Validates an optional custom pixel event id or name.
///
/// ## Rules
/// - If set, must not be blank
/// - At most MAX_PIXEL_IDENTIFIER_LEN (100) characters
pub fn validate_pixel_identifier(field: &str, value: Option<&str>) -> ValidationResult<()> {
    let Some(value) = value else {
        return Ok(());
    };

    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_PIXEL_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_PIXEL_IDENTIFIER_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
