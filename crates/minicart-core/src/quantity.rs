//! # Quantity Module
//!
//! Reduces the host cart to the number drawn in the trigger badge.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CartSnapshot ──► loading? ──yes──► 0                                  │
//! │                      │                                                  │
//! │                      no                                                 │
//! │                      ▼                                                  │
//! │               count_items(policy, items) ──► displayed quantity        │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                              show_badge(quantity, QuantityDisplay)     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Forcing `0` while loading avoids flashing a stale or partial count.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CartItem, CartSnapshot, CountPolicy, QuantityDisplay};

/// Counts cart lines under `policy`.
///
/// Total for any input: an empty cart counts `0`, and quantity sums saturate
/// at `u32::MAX`.
///
/// ## Example
/// ```rust
/// use minicart_core::quantity::count_items;
/// use minicart_core::{Availability, CartItem, CountPolicy};
///
/// let items = vec![
///     CartItem::new("a", 2, Availability::Available),
///     CartItem::new("b", 3, Availability::Available),
/// ];
/// assert_eq!(count_items(CountPolicy::Distinct, &items), 2);
/// assert_eq!(count_items(CountPolicy::Total, &items), 5);
/// ```
pub fn count_items(policy: CountPolicy, items: &[CartItem]) -> u32 {
    let lines = items.iter();

    match policy {
        CountPolicy::Distinct => saturating_len(items.len()),
        CountPolicy::DistinctAvailable => {
            let available = lines.filter(|item| item.availability.is_available()).count();
            saturating_len(available)
        }
        CountPolicy::Total => lines.fold(0u32, |acc, item| acc.saturating_add(item.quantity)),
        CountPolicy::TotalAvailable => lines
            .filter(|item| item.availability.is_available())
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity)),
    }
}

fn saturating_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// The quantity the trigger shows for a snapshot of the host cart.
///
/// `0` while the host is loading or has no order form.
pub fn displayed_quantity(policy: CountPolicy, snapshot: &CartSnapshot) -> u32 {
    if snapshot.loading {
        return 0;
    }

    snapshot
        .order_form
        .as_ref()
        .map_or(0, |form| count_items(policy, &form.items))
}

/// Badge visibility policy.
///
/// ```rust
/// use minicart_core::quantity::show_badge;
/// use minicart_core::QuantityDisplay;
///
/// assert!(!show_badge(0, QuantityDisplay::NotEmpty));
/// assert!(show_badge(0, QuantityDisplay::Always));
/// assert!(show_badge(3, QuantityDisplay::NotEmpty));
/// ```
#[inline]
pub fn show_badge(quantity: u32, display: QuantityDisplay) -> bool {
    match display {
        QuantityDisplay::Always => true,
        QuantityDisplay::NotEmpty => quantity > 0,
    }
}

/// Quantity plus badge visibility, handed to the trigger renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuantityBadge {
    pub quantity: u32,
    pub show_badge: bool,
}

impl QuantityBadge {
    /// Derives the badge for a snapshot.
    pub fn derive(policy: CountPolicy, display: QuantityDisplay, snapshot: &CartSnapshot) -> Self {
        let quantity = displayed_quantity(policy, snapshot);
        QuantityBadge {
            quantity,
            show_badge: show_badge(quantity, display),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
