//! # Handlers Module
//!
//! Entry points the host calls into the widget, organized by concern:
//!
//! - [`trigger`] - click and pointer-enter on the icon button
//! - [`render`] - view plan for the host renderer
//! - [`pixel`] - cart-id pixel observer and custom open events
//!
//! ## Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  host event ──► handler(store/config/snapshot) ──► minicart-core ──►    │
//! │                                                    new state / view     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Handlers take their state as explicit parameters; none of them reaches for
//! a global.

pub mod pixel;
pub mod render;
pub mod trigger;
