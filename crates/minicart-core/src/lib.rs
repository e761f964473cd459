//! # minicart-core: Pure Logic for the Storefront Minicart
//!
//! This crate is the **heart** of the minicart widget. It contains the
//! counting rules, the open/close state machine and the variation routing as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Minicart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront renderer (host)                      │   │
//! │  │    Icon + Badge ──► Drawer / Popup / Link ──► Cart content     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ MinicartView (serialized)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-widget (app layer)                   │   │
//! │  │    InteractionStore, CartSource, handlers, pixel observer       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ minicart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ quantity  │  │ interaction │  │ variation│  │   │
//! │  │   │ CartItem  │  │ count +   │  │  reducer +  │  │ selector │  │   │
//! │  │   │ policies  │  │  badge    │  │ click table │  │          │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartItem, CountPolicy, Variation, etc.)
//! - [`quantity`] - Displayed quantity and badge visibility
//! - [`interaction`] - Open/close state machine
//! - [`variation`] - Variation selection and presentation branches
//! - [`validation`] - Configuration value validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output
//! 2. **Total Functions**: unknown policies and variations degrade to a default
//! 3. **Explicit Transitions**: the click policy is a table, not nested ifs
//! 4. **Typed Errors**: only configuration can fail, and it fails with an enum
//!
//! ## Example Usage
//!
//! ```rust
//! use minicart_core::interaction::{InteractionState, TriggerEvent};
//! use minicart_core::quantity::{count_items, show_badge};
//! use minicart_core::{Availability, CartItem, CountPolicy, QuantityDisplay, Variation};
//!
//! let items = vec![
//!     CartItem::new("1", 2, Availability::Unavailable),
//!     CartItem::new("2", 3, Availability::Available),
//! ];
//! assert_eq!(count_items(CountPolicy::TotalAvailable, &items), 3);
//! assert!(show_badge(3, QuantityDisplay::NotEmpty));
//!
//! let state = InteractionState::new(Variation::Popup, false);
//! let state = state.transition(TriggerEvent::Click);
//! assert!(state.open);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod interaction;
pub mod quantity;
pub mod types;
pub mod validation;
pub mod variation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use interaction::{Action, InteractionState, TriggerEvent};
pub use types::*;
pub use variation::{select_presentation, Presentation};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Checkout cart URL used by the `link` variation when no explicit
/// link URL is configured.
pub const DEFAULT_CHECKOUT_URL: &str = "/checkout/#/cart";

/// Default maximum drawer width, in pixels.
pub const DEFAULT_MAX_DRAWER_WIDTH: u32 = 400;

/// Maximum length accepted for custom pixel event ids and names.
pub const MAX_PIXEL_IDENTIFIER_LEN: usize = 100;
