//! # Variation Selector
//!
//! Routes the configured variation to a presentation branch. The set of
//! branches is closed, so it is an enum rather than a trait object.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "link"        ──► Presentation::Link { href }          trigger only   │
//! │  "drawer"      ──► Presentation::Drawer { open, .. }    trigger + panel│
//! │  "alwaysOpen"  ──► Presentation::AlwaysOpen             panel only     │
//! │  anything else ──► Presentation::Popup { open }         trigger + panel│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::interaction::InteractionState;
use crate::types::{BackdropMode, DrawerWidth, SlideDirection, Variation};

/// Maps a raw variation value to a branch. Missing or unknown → `Popup`.
///
/// ```rust
/// use minicart_core::{select_presentation, Variation};
///
/// assert_eq!(select_presentation(Some("drawer")), Variation::Drawer);
/// assert_eq!(select_presentation(Some("sidebar")), Variation::Popup);
/// assert_eq!(select_presentation(None), Variation::Popup);
/// ```
pub fn select_presentation(raw: Option<&str>) -> Variation {
    raw.map(Variation::from).unwrap_or_default()
}

/// Link target for the `link` variation: the configured URL, else checkout.
pub fn resolve_link_href(link_variation_url: Option<&str>, checkout_url: &str) -> String {
    link_variation_url.unwrap_or(checkout_url).to_string()
}

/// Static settings the branches need besides the interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresentationSettings {
    pub link_href: String,
    pub max_drawer_width: DrawerWidth,
    pub slide_direction: SlideDirection,
    pub backdrop_mode: BackdropMode,
}

/// The chosen branch with everything its renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Presentation {
    Link {
        href: String,
    },
    #[serde(rename_all = "camelCase")]
    Drawer {
        open: bool,
        max_width: DrawerWidth,
        slide_direction: SlideDirection,
        backdrop_mode: BackdropMode,
    },
    Popup {
        open: bool,
    },
    AlwaysOpen,
}

impl Presentation {
    /// Builds the branch for the current state.
    pub fn for_state(state: &InteractionState, settings: &PresentationSettings) -> Self {
        match state.variation {
            Variation::Link => Presentation::Link {
                href: settings.link_href.clone(),
            },
            Variation::Drawer => Presentation::Drawer {
                open: state.open,
                max_width: settings.max_drawer_width.clone(),
                slide_direction: settings.slide_direction,
                backdrop_mode: settings.backdrop_mode,
            },
            Variation::Popup => Presentation::Popup { open: state.open },
            Variation::AlwaysOpen => Presentation::AlwaysOpen,
        }
    }

    pub fn variation(&self) -> Variation {
        match self {
            Presentation::Link { .. } => Variation::Link,
            Presentation::Drawer { .. } => Variation::Drawer,
            Presentation::Popup { .. } => Variation::Popup,
            Presentation::AlwaysOpen => Variation::AlwaysOpen,
        }
    }

    /// Every branch but `AlwaysOpen` draws the icon trigger.
    pub fn has_trigger(&self) -> bool {
        !matches!(self, Presentation::AlwaysOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Action;
    use crate::DEFAULT_CHECKOUT_URL;

    fn settings() -> PresentationSettings {
        PresentationSettings {
            link_href: DEFAULT_CHECKOUT_URL.to_string(),
            ..PresentationSettings::default()
        }
    }

    #[test]
    fn test_select_presentation() {
        assert_eq!(select_presentation(Some("link")), Variation::Link);
        assert_eq!(select_presentation(Some("alwaysOpen")), Variation::AlwaysOpen);
        assert_eq!(select_presentation(Some("popup")), Variation::Popup);
        assert_eq!(select_presentation(Some("")), Variation::Popup);
    }

    #[test]
    fn test_link_href_falls_back_to_checkout() {
        assert_eq!(resolve_link_href(None, "/checkout/#/cart"), "/checkout/#/cart");
        assert_eq!(resolve_link_href(Some("/cart"), "/checkout/#/cart"), "/cart");
    }

    #[test]
    fn test_branch_follows_state() {
        let state = InteractionState::new(Variation::Drawer, false).reduce(Action::OpenMinicart);
        let presentation = Presentation::for_state(&state, &settings());
        assert_eq!(
            presentation,
            Presentation::Drawer {
                open: true,
                max_width: DrawerWidth::Pixels(400),
                slide_direction: SlideDirection::RightToLeft,
                backdrop_mode: BackdropMode::Visible,
            }
        );
        assert_eq!(presentation.variation(), Variation::Drawer);
        assert!(presentation.has_trigger());
    }

    #[test]
    fn test_always_open_has_no_trigger() {
        let state = InteractionState::new(Variation::AlwaysOpen, true);
        let presentation = Presentation::for_state(&state, &settings());
        assert_eq!(presentation, Presentation::AlwaysOpen);
        assert!(!presentation.has_trigger());
    }

    #[test]
    fn test_presentation_wire_format() {
        let state = InteractionState::new(Variation::Link, false);
        let json = serde_json::to_string(&Presentation::for_state(&state, &settings())).unwrap();
        assert_eq!(json, r##"{"kind":"link","href":"/checkout/#/cart"}"##);

        let drawer = Presentation::Drawer {
            open: false,
            max_width: DrawerWidth::Css("50vw".to_string()),
            slide_direction: SlideDirection::LeftToRight,
            backdrop_mode: BackdropMode::None,
        };
        let value = serde_json::to_value(&drawer).unwrap();
        assert_eq!(value["kind"], "drawer");
        assert_eq!(value["maxWidth"], "50vw");
        assert_eq!(value["slideDirection"], "leftToRight");
        assert_eq!(value["backdropMode"], "none");
    }
}
