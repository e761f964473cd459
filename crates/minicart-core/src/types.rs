//! # Domain Types
//!
//! Core domain types used throughout the minicart.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Host data (read-only)           Configuration (fixed at mount)         │
//! │  ┌─────────────────┐             ┌─────────────────┐                   │
//! │  │  CartSnapshot   │             │   Variation     │                   │
//! │  │  ─────────────  │             │  link / drawer  │                   │
//! │  │  order_form?    │             │  popup / open   │                   │
//! │  │  loading        │             ├─────────────────┤                   │
//! │  └────────┬────────┘             │  CountPolicy    │                   │
//! │           ▼                      │  QuantityDisplay│                   │
//! │  ┌─────────────────┐             │  SlideDirection │                   │
//! │  │   OrderForm     │             │  BackdropMode   │                   │
//! │  │  id, items[]    │             │  DrawerWidth    │                   │
//! │  └────────┬────────┘             └─────────────────┘                   │
//! │           ▼                                                             │
//! │  ┌─────────────────┐                                                   │
//! │  │   CartItem      │                                                   │
//! │  │  quantity       │                                                   │
//! │  │  availability   │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Parsing
//! Every configuration enum deserializes from any string. Unrecognized values
//! degrade to the documented default instead of failing, since a bad theme
//! setting must never take the cart affordance off the page.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_MAX_DRAWER_WIDTH;

// =============================================================================
// Availability
// =============================================================================

/// Availability of a cart line, as reported by the host order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(from = "String")]
#[ts(export)]
pub enum Availability {
    /// The line can be purchased.
    Available,
    /// Generic unavailability.
    Unavailable,
    /// Out of stock at the seller.
    WithoutStock,
    /// Cannot be shipped to the selected address.
    CannotBeDelivered,
    /// The item has no price for the current sales channel.
    NullPrice,
    /// Anything the host reports that we do not recognize.
    #[default]
    Unknown,
}

impl Availability {
    /// Returns the wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
            Availability::WithoutStock => "withoutStock",
            Availability::CannotBeDelivered => "cannotBeDelivered",
            Availability::NullPrice => "nullPrice",
            Availability::Unknown => "unknown",
        }
    }

    /// Only `available` counts as available.
    #[inline]
    pub const fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl From<&str> for Availability {
    fn from(value: &str) -> Self {
        match value {
            "available" => Availability::Available,
            "unavailable" => Availability::Unavailable,
            "withoutStock" => Availability::WithoutStock,
            "cannotBeDelivered" => Availability::CannotBeDelivered,
            "nullPrice" => Availability::NullPrice,
            _ => Availability::Unknown,
        }
    }
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        Availability::from(value.as_str())
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the host cart.
///
/// Owned by the host; the widget only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Line identifier (SKU id on the host).
    #[serde(default)]
    pub id: String,

    /// Units of this line in the cart.
    pub quantity: u32,

    /// Whether the line can currently be bought.
    #[serde(default)]
    pub availability: Availability,
}

impl CartItem {
    /// Creates a cart line.
    pub fn new(id: impl Into<String>, quantity: u32, availability: Availability) -> Self {
        CartItem {
            id: id.into(),
            quantity,
            availability,
        }
    }
}

// =============================================================================
// Order Form
// =============================================================================

/// The host's cart document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderForm {
    /// Cart identifier. Empty until the host assigns one.
    #[serde(default)]
    pub id: String,

    /// Cart lines.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl OrderForm {
    /// Creates an order form.
    pub fn new(id: impl Into<String>, items: Vec<CartItem>) -> Self {
        OrderForm {
            id: id.into(),
            items,
        }
    }
}

/// One observation of the host cart source.
///
/// `order_form` is `None` when the host has nothing (first load, fetch error).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    #[serde(default)]
    pub order_form: Option<OrderForm>,
    #[serde(default)]
    pub loading: bool,
}

impl CartSnapshot {
    /// A snapshot taken while the host is still fetching.
    pub fn loading() -> Self {
        CartSnapshot {
            order_form: None,
            loading: true,
        }
    }

    /// A settled snapshot.
    pub fn ready(order_form: OrderForm) -> Self {
        CartSnapshot {
            order_form: Some(order_form),
            loading: false,
        }
    }

    /// Cart id usable by observers: present only once loading finished.
    pub fn settled_cart_id(&self) -> Option<&str> {
        if self.loading {
            return None;
        }
        self.order_form.as_ref().map(|form| form.id.as_str())
    }
}

// =============================================================================
// Count Policy
// =============================================================================

/// Rule for reducing the cart lines to the displayed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(from = "String")]
#[ts(export)]
pub enum CountPolicy {
    /// One per line.
    #[default]
    Distinct,
    /// One per available line.
    DistinctAvailable,
    /// Sum of quantities.
    Total,
    /// Sum of quantities over available lines.
    TotalAvailable,
}

impl CountPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CountPolicy::Distinct => "distinct",
            CountPolicy::DistinctAvailable => "distinctAvailable",
            CountPolicy::Total => "total",
            CountPolicy::TotalAvailable => "totalAvailable",
        }
    }
}

impl From<&str> for CountPolicy {
    fn from(value: &str) -> Self {
        match value {
            "distinctAvailable" => CountPolicy::DistinctAvailable,
            "total" => CountPolicy::Total,
            "totalAvailable" => CountPolicy::TotalAvailable,
            _ => CountPolicy::Distinct,
        }
    }
}

impl From<String> for CountPolicy {
    fn from(value: String) -> Self {
        CountPolicy::from(value.as_str())
    }
}

// =============================================================================
// Quantity Display
// =============================================================================

/// When the quantity badge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[serde(from = "String")]
#[ts(export)]
pub enum QuantityDisplay {
    /// Only when the displayed quantity is above zero.
    #[default]
    NotEmpty,
    /// Always, including `0`.
    Always,
}

impl QuantityDisplay {
    pub const fn as_str(&self) -> &'static str {
        match self {
            QuantityDisplay::NotEmpty => "not-empty",
            QuantityDisplay::Always => "always",
        }
    }
}

impl From<&str> for QuantityDisplay {
    fn from(value: &str) -> Self {
        match value {
            "always" => QuantityDisplay::Always,
            _ => QuantityDisplay::NotEmpty,
        }
    }
}

impl From<String> for QuantityDisplay {
    fn from(value: String) -> Self {
        QuantityDisplay::from(value.as_str())
    }
}

// =============================================================================
// Variation
// =============================================================================

/// Presentation family, fixed per mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(from = "String")]
#[ts(export)]
pub enum Variation {
    /// The trigger is a plain link to the checkout.
    Link,
    /// Slide-out drawer.
    Drawer,
    /// Popup anchored under the trigger.
    #[default]
    Popup,
    /// Content always rendered; no trigger.
    AlwaysOpen,
}

impl Variation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variation::Link => "link",
            Variation::Drawer => "drawer",
            Variation::Popup => "popup",
            Variation::AlwaysOpen => "alwaysOpen",
        }
    }

    /// Whether this variation has an expandable panel driven by `open`.
    #[inline]
    pub const fn is_expandable(&self) -> bool {
        matches!(self, Variation::Drawer | Variation::Popup)
    }
}

impl From<&str> for Variation {
    fn from(value: &str) -> Self {
        match value {
            "link" => Variation::Link,
            "drawer" => Variation::Drawer,
            "alwaysOpen" => Variation::AlwaysOpen,
            _ => Variation::Popup,
        }
    }
}

impl From<String> for Variation {
    fn from(value: String) -> Self {
        Variation::from(value.as_str())
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Open Behavior
// =============================================================================

/// Which interaction channel currently governs opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OpenBehavior {
    Click,
    Hover,
}

impl fmt::Display for OpenBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenBehavior::Click => f.write_str("click"),
            OpenBehavior::Hover => f.write_str("hover"),
        }
    }
}

// =============================================================================
// Drawer Settings
// =============================================================================

/// Side the drawer slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(from = "String")]
#[ts(export)]
pub enum SlideDirection {
    #[default]
    RightToLeft,
    LeftToRight,
    Horizontal,
    Vertical,
}

impl From<&str> for SlideDirection {
    fn from(value: &str) -> Self {
        match value {
            "leftToRight" => SlideDirection::LeftToRight,
            "horizontal" => SlideDirection::Horizontal,
            "vertical" => SlideDirection::Vertical,
            _ => SlideDirection::RightToLeft,
        }
    }
}

impl From<String> for SlideDirection {
    fn from(value: String) -> Self {
        SlideDirection::from(value.as_str())
    }
}

/// Whether the drawer dims the page behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[serde(from = "String")]
#[ts(export)]
pub enum BackdropMode {
    #[default]
    Visible,
    None,
}

impl From<&str> for BackdropMode {
    fn from(value: &str) -> Self {
        match value {
            "none" => BackdropMode::None,
            _ => BackdropMode::Visible,
        }
    }
}

impl From<String> for BackdropMode {
    fn from(value: String) -> Self {
        BackdropMode::from(value.as_str())
    }
}

/// Maximum drawer width: a pixel count or a raw CSS length (`"50vw"`).
///
/// Numeric strings (`"400"`) are pixels whether they come from JSON or env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[serde(from = "RawDrawerWidth")]
#[ts(export)]
pub enum DrawerWidth {
    Pixels(u32),
    Css(String),
}

/// Wire shape of [`DrawerWidth`] before numeric strings are normalized.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDrawerWidth {
    Pixels(u32),
    Css(String),
}

impl From<RawDrawerWidth> for DrawerWidth {
    fn from(raw: RawDrawerWidth) -> Self {
        match raw {
            RawDrawerWidth::Pixels(px) => DrawerWidth::Pixels(px),
            RawDrawerWidth::Css(css) => DrawerWidth::from(css.as_str()),
        }
    }
}

impl Default for DrawerWidth {
    fn default() -> Self {
        DrawerWidth::Pixels(DEFAULT_MAX_DRAWER_WIDTH)
    }
}

impl From<&str> for DrawerWidth {
    /// Bare integers become pixels, anything else is kept as CSS.
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<u32>() {
            Ok(px) => DrawerWidth::Pixels(px),
            Err(_) => DrawerWidth::Css(value.to_string()),
        }
    }
}

impl fmt::Display for DrawerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerWidth::Pixels(px) => write!(f, "{}px", px),
            DrawerWidth::Css(css) => f.write_str(css),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strings_degrade_to_defaults() {
        assert_eq!(CountPolicy::from("everything"), CountPolicy::Distinct);
        assert_eq!(Variation::from("sidebar"), Variation::Popup);
        assert_eq!(QuantityDisplay::from("never"), QuantityDisplay::NotEmpty);
        assert_eq!(SlideDirection::from(""), SlideDirection::RightToLeft);
        assert_eq!(BackdropMode::from("dim"), BackdropMode::Visible);
        assert_eq!(Availability::from("backorder"), Availability::Unknown);
    }

    #[test]
    fn test_enums_deserialize_leniently() {
        let policy: CountPolicy = serde_json::from_str("\"totalAvailable\"").unwrap();
        assert_eq!(policy, CountPolicy::TotalAvailable);

        let variation: Variation = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(variation, Variation::Popup);

        let display: QuantityDisplay = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(display, QuantityDisplay::Always);
    }

    #[test]
    fn test_enums_serialize_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&Variation::AlwaysOpen).unwrap(),
            "\"alwaysOpen\""
        );
        assert_eq!(
            serde_json::to_string(&QuantityDisplay::NotEmpty).unwrap(),
            "\"not-empty\""
        );
        assert_eq!(
            serde_json::to_string(&OpenBehavior::Hover).unwrap(),
            "\"hover\""
        );
    }

    #[test]
    fn test_cart_item_from_host_json() {
        let json = r#"{"id":"42","quantity":3,"availability":"withoutStock"}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, CartItem::new("42", 3, Availability::WithoutStock));
        assert!(!item.availability.is_available());

        let bare: CartItem = serde_json::from_str(r#"{"quantity":1}"#).unwrap();
        assert_eq!(bare.availability, Availability::Unknown);
    }

    #[test]
    fn test_drawer_width() {
        assert_eq!(DrawerWidth::default(), DrawerWidth::Pixels(400));
        assert_eq!(DrawerWidth::from("320"), DrawerWidth::Pixels(320));
        assert_eq!(DrawerWidth::from("50vw"), DrawerWidth::Css("50vw".to_string()));
        assert_eq!(DrawerWidth::Pixels(320).to_string(), "320px");

        let width: DrawerWidth = serde_json::from_str("\"100%\"").unwrap();
        assert_eq!(width, DrawerWidth::Css("100%".to_string()));
        let width: DrawerWidth = serde_json::from_str("280").unwrap();
        assert_eq!(width, DrawerWidth::Pixels(280));
        let width: DrawerWidth = serde_json::from_str("\" 280 \"").unwrap();
        assert_eq!(width, DrawerWidth::from("280"));
        assert_eq!(width, DrawerWidth::Pixels(280));
    }

    #[test]
    fn test_settled_cart_id() {
        assert_eq!(CartSnapshot::loading().settled_cart_id(), None);
        assert_eq!(CartSnapshot::default().settled_cart_id(), None);

        let snapshot = CartSnapshot::ready(OrderForm::new("abc", vec![]));
        assert_eq!(snapshot.settled_cart_id(), Some("abc"));

        let mut stale = snapshot.clone();
        stale.loading = true;
        assert_eq!(stale.settled_cart_id(), None);
    }
}
