//! # Minicart Configuration
//!
//! Settings fixed at mount time.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MINICART_*`)
//! 2. JSON document from the storefront theme (camelCase keys)
//! 3. Defaults (this file)
//!
//! ## Document Format
//! ```json
//! {
//!   "variation": "drawer",
//!   "openOnHover": true,
//!   "maxDrawerWidth": "50vw",
//!   "itemCountMode": "totalAvailable",
//!   "quantityDisplay": "always",
//!   "customPixelEventName": "addToCart"
//! }
//! ```
//!
//! Unknown enum values degrade to defaults during parsing; everything else is
//! checked by [`MinicartConfig::validate`].

use minicart_core::validation::{validate_drawer_width, validate_link_url, validate_pixel_identifier};
use minicart_core::variation::{resolve_link_href, PresentationSettings};
use minicart_core::{
    BackdropMode, CoreResult, CountPolicy, DrawerWidth, QuantityDisplay, SlideDirection, Variation,
    DEFAULT_CHECKOUT_URL,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::WidgetResult;

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinicartConfig {
    /// Presentation family.
    pub variation: Variation,

    /// Allows hover-driven opening.
    pub open_on_hover: bool,

    /// Target of the `link` variation. Falls back to `checkout_url`.
    pub link_variation_url: Option<String>,

    /// Host checkout cart URL.
    pub checkout_url: String,

    pub max_drawer_width: DrawerWidth,
    pub drawer_slide_direction: SlideDirection,
    pub backdrop_mode: BackdropMode,

    /// When the quantity badge is shown.
    pub quantity_display: QuantityDisplay,

    /// How cart lines are counted.
    pub item_count_mode: CountPolicy,

    /// Pixel event id that opens the minicart.
    pub custom_pixel_event_id: Option<String>,

    /// Pixel event name that opens the minicart.
    pub custom_pixel_event_name: Option<String>,
}

impl Default for MinicartConfig {
    /// Popup, click-to-open, distinct count, badge only when not empty.
    fn default() -> Self {
        MinicartConfig {
            variation: Variation::Popup,
            open_on_hover: false,
            link_variation_url: None,
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            max_drawer_width: DrawerWidth::default(),
            drawer_slide_direction: SlideDirection::RightToLeft,
            backdrop_mode: BackdropMode::Visible,
            quantity_display: QuantityDisplay::NotEmpty,
            item_count_mode: CountPolicy::Distinct,
            custom_pixel_event_id: None,
            custom_pixel_event_name: None,
        }
    }
}

impl MinicartConfig {
    /// Parses a theme JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        let config: MinicartConfig = serde_json::from_str(json)?;
        debug!(variation = %config.variation, "Parsed minicart config document");
        Ok(config)
    }

    /// Defaults overridden by `MINICART_*` environment variables.
    pub fn from_env() -> Self {
        MinicartConfig::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `MINICART_*` overrides from `lookup`.
    ///
    /// ## Variables
    /// - `MINICART_VARIATION`
    /// - `MINICART_OPEN_ON_HOVER` (`true` / `1`)
    /// - `MINICART_LINK_URL`
    /// - `MINICART_CHECKOUT_URL`
    /// - `MINICART_QUANTITY_DISPLAY`
    /// - `MINICART_ITEM_COUNT_MODE`
    /// - `MINICART_MAX_DRAWER_WIDTH` (`400`, `50vw`, ...)
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(variation) = lookup("MINICART_VARIATION") {
            self.variation = Variation::from(variation);
        }

        if let Some(flag) = lookup("MINICART_OPEN_ON_HOVER") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => self.open_on_hover = true,
                "false" | "0" => self.open_on_hover = false,
                other => warn!(value = other, "Ignoring MINICART_OPEN_ON_HOVER"),
            }
        }

        if let Some(url) = lookup("MINICART_LINK_URL") {
            self.link_variation_url = Some(url);
        }

        if let Some(url) = lookup("MINICART_CHECKOUT_URL") {
            self.checkout_url = url;
        }

        if let Some(display) = lookup("MINICART_QUANTITY_DISPLAY") {
            self.quantity_display = QuantityDisplay::from(display);
        }

        if let Some(mode) = lookup("MINICART_ITEM_COUNT_MODE") {
            self.item_count_mode = CountPolicy::from(mode);
        }

        if let Some(width) = lookup("MINICART_MAX_DRAWER_WIDTH") {
            self.max_drawer_width = DrawerWidth::from(width.as_str());
        }

        self
    }

    /// Checks the free-form fields.
    pub fn validate(&self) -> CoreResult<()> {
        validate_link_url("checkoutUrl", &self.checkout_url)?;
        if let Some(url) = &self.link_variation_url {
            validate_link_url("linkVariationUrl", url)?;
        }
        validate_drawer_width(&self.max_drawer_width)?;
        validate_pixel_identifier("customPixelEventId", self.custom_pixel_event_id.as_deref())?;
        validate_pixel_identifier(
            "customPixelEventName",
            self.custom_pixel_event_name.as_deref(),
        )?;
        Ok(())
    }

    /// Settings for the presentation branches.
    pub fn presentation_settings(&self) -> PresentationSettings {
        PresentationSettings {
            link_href: resolve_link_href(self.link_variation_url.as_deref(), &self.checkout_url),
            max_drawer_width: self.max_drawer_width.clone(),
            slide_direction: self.drawer_slide_direction,
            backdrop_mode: self.backdrop_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MinicartConfig::default();
        assert_eq!(config.variation, Variation::Popup);
        assert!(!config.open_on_hover);
        assert_eq!(config.max_drawer_width, DrawerWidth::Pixels(400));
        assert_eq!(config.quantity_display, QuantityDisplay::NotEmpty);
        assert_eq!(config.item_count_mode, CountPolicy::Distinct);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_keys() {
        let config = MinicartConfig::from_json(
            r#"{"variation":"drawer","openOnHover":true,"maxDrawerWidth":"50vw"}"#,
        )
        .unwrap();

        assert_eq!(config.variation, Variation::Drawer);
        assert!(config.open_on_hover);
        assert_eq!(config.max_drawer_width, DrawerWidth::Css("50vw".to_string()));
        assert_eq!(config.checkout_url, DEFAULT_CHECKOUT_URL);
    }

    #[test]
    fn test_from_json_degrades_unknown_enums() {
        let config = MinicartConfig::from_json(
            r#"{"variation":"sidebar","itemCountMode":"byWeight","quantityDisplay":"never"}"#,
        )
        .unwrap();

        assert_eq!(config.variation, Variation::Popup);
        assert_eq!(config.item_count_mode, CountPolicy::Distinct);
        assert_eq!(config.quantity_display, QuantityDisplay::NotEmpty);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(MinicartConfig::from_json("{\"openOnHover\": \"yes\"}").is_err());
        assert!(MinicartConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = MinicartConfig::default().with_env_overrides(env(&[
            ("MINICART_VARIATION", "link"),
            ("MINICART_OPEN_ON_HOVER", "1"),
            ("MINICART_LINK_URL", "/cart"),
            ("MINICART_ITEM_COUNT_MODE", "total"),
            ("MINICART_QUANTITY_DISPLAY", "always"),
            ("MINICART_MAX_DRAWER_WIDTH", "320"),
        ]));

        assert_eq!(config.variation, Variation::Link);
        assert!(config.open_on_hover);
        assert_eq!(config.link_variation_url.as_deref(), Some("/cart"));
        assert_eq!(config.item_count_mode, CountPolicy::Total);
        assert_eq!(config.quantity_display, QuantityDisplay::Always);
        assert_eq!(config.max_drawer_width, DrawerWidth::Pixels(320));
    }

    #[test]
    fn test_env_ignores_unparseable_flag() {
        let config = MinicartConfig {
            open_on_hover: true,
            ..MinicartConfig::default()
        }
        .with_env_overrides(env(&[("MINICART_OPEN_ON_HOVER", "sometimes")]));
        assert!(config.open_on_hover);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let config = MinicartConfig {
            link_variation_url: Some("  ".to_string()),
            ..MinicartConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MinicartConfig {
            max_drawer_width: DrawerWidth::Pixels(0),
            ..MinicartConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MinicartConfig {
            custom_pixel_event_name: Some("e".repeat(200)),
            ..MinicartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_numeric_width_string_is_pixels_in_json_and_env() {
        let from_json =
            MinicartConfig::from_json(r#"{"variation":"drawer","maxDrawerWidth":"400"}"#).unwrap();
        let from_env = MinicartConfig::default()
            .with_env_overrides(env(&[("MINICART_MAX_DRAWER_WIDTH", "400")]));

        assert_eq!(from_json.max_drawer_width, DrawerWidth::Pixels(400));
        assert_eq!(from_json.max_drawer_width, from_env.max_drawer_width);
        assert!(from_json.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_free_form_css_and_hrefs() {
        let config = MinicartConfig::from_json(
            r#"{"variation":"drawer","maxDrawerWidth":"min(400px, 90vw)","linkVariationUrl":"?tab=cart"}"#,
        )
        .unwrap();
        assert_eq!(
            config.max_drawer_width,
            DrawerWidth::Css("min(400px, 90vw)".to_string())
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.presentation_settings().link_href, "?tab=cart");
    }

    #[test]
    fn test_link_href_resolution() {
        let config = MinicartConfig::default();
        assert_eq!(config.presentation_settings().link_href, DEFAULT_CHECKOUT_URL);

        let config = MinicartConfig {
            link_variation_url: Some("https://shop.example.com/cart".to_string()),
            ..MinicartConfig::default()
        };
        assert_eq!(
            config.presentation_settings().link_href,
            "https://shop.example.com/cart"
        );
    }
}
