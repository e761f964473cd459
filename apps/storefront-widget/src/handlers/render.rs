//! # Render Handler
//!
//! Builds the view plan the host renderer draws. The widget decides *what*
//! is on screen; the host decides how it looks.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MinicartView                                                           │
//! │  ├── presentation     link { href } | drawer { .. } | popup | alwaysOpen│
//! │  ├── trigger?         { quantity, showBadge, hoverEnabled }             │
//! │  └── contentVisible   alwaysOpen, or drawer/popup while open            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use minicart_core::quantity::QuantityBadge;
use minicart_core::variation::PresentationSettings;
use minicart_core::{CartSnapshot, InteractionState, Presentation};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::state::MinicartConfig;

/// What the icon button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TriggerView {
    pub quantity: u32,
    pub show_badge: bool,
    /// Attach the pointer-enter listener.
    pub hover_enabled: bool,
}

/// Complete view plan for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MinicartView {
    pub presentation: Presentation,
    pub trigger: Option<TriggerView>,
    pub content_visible: bool,
}

/// Renders the widget for the given state and cart snapshot.
pub fn render(
    state: &InteractionState,
    config: &MinicartConfig,
    settings: &PresentationSettings,
    snapshot: &CartSnapshot,
) -> MinicartView {
    let presentation = Presentation::for_state(state, settings);

    let trigger = presentation.has_trigger().then(|| {
        let badge = QuantityBadge::derive(config.item_count_mode, config.quantity_display, snapshot);
        TriggerView {
            quantity: badge.quantity,
            show_badge: badge.show_badge,
            hover_enabled: state.hover_enabled(),
        }
    });

    MinicartView {
        presentation,
        trigger,
        content_visible: state.content_visible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicart_core::{
        Action, Availability, CartItem, CountPolicy, OrderForm, QuantityDisplay, Variation,
    };

    fn snapshot() -> CartSnapshot {
        CartSnapshot::ready(OrderForm::new(
            "of-1",
            vec![
                CartItem::new("1", 2, Availability::Unavailable),
                CartItem::new("2", 3, Availability::Available),
            ],
        ))
    }

    fn render_with(config: &MinicartConfig, state: &InteractionState, snapshot: &CartSnapshot) -> MinicartView {
        render(state, config, &config.presentation_settings(), snapshot)
    }

    #[test]
    fn test_popup_closed_shows_trigger_only() {
        let config = MinicartConfig::default();
        let state = InteractionState::new(Variation::Popup, false);
        let view = render_with(&config, &state, &snapshot());

        assert_eq!(view.presentation, Presentation::Popup { open: false });
        assert!(!view.content_visible);
        assert_eq!(
            view.trigger,
            Some(TriggerView {
                quantity: 2,
                show_badge: true,
                hover_enabled: false
            })
        );
    }

    #[test]
    fn test_count_policy_flows_into_badge() {
        let config = MinicartConfig {
            item_count_mode: CountPolicy::TotalAvailable,
            ..MinicartConfig::default()
        };
        let state = InteractionState::new(Variation::Drawer, true);
        let view = render_with(&config, &state, &snapshot());

        let trigger = view.trigger.unwrap();
        assert_eq!(trigger.quantity, 3);
        assert!(trigger.hover_enabled);
    }

    #[test]
    fn test_loading_hides_badge_unless_always() {
        let state = InteractionState::new(Variation::Popup, false);
        let mut loading = snapshot();
        loading.loading = true;

        let view = render_with(&MinicartConfig::default(), &state, &loading);
        let trigger = view.trigger.unwrap();
        assert_eq!(trigger.quantity, 0);
        assert!(!trigger.show_badge);

        let always = MinicartConfig {
            quantity_display: QuantityDisplay::Always,
            ..MinicartConfig::default()
        };
        let trigger = render_with(&always, &state, &loading).trigger.unwrap();
        assert_eq!(trigger.quantity, 0);
        assert!(trigger.show_badge);
    }

    #[test]
    fn test_always_open_renders_content_regardless_of_state() {
        let config = MinicartConfig {
            variation: Variation::AlwaysOpen,
            ..MinicartConfig::default()
        };
        let mut state = InteractionState::new(Variation::AlwaysOpen, false);

        for action in [Action::OpenMinicart, Action::CloseMinicart, Action::CloseMinicart] {
            state = state.reduce(action);
            let view = render_with(&config, &state, &snapshot());
            assert_eq!(view.presentation, Presentation::AlwaysOpen);
            assert!(view.content_visible);
            assert!(view.trigger.is_none());
        }
    }

    #[test]
    fn test_link_points_at_checkout() {
        let config = MinicartConfig {
            variation: Variation::Link,
            ..MinicartConfig::default()
        };
        let state = InteractionState::new(Variation::Link, false);
        let view = render_with(&config, &state, &snapshot());

        assert_eq!(
            view.presentation,
            Presentation::Link {
                href: "/checkout/#/cart".to_string()
            }
        );
        assert!(!view.content_visible);
        assert!(view.trigger.is_some());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let state = InteractionState::new(Variation::Popup, false).reduce(Action::OpenMinicart);
        let view = render_with(&MinicartConfig::default(), &state, &snapshot());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["contentVisible"], true);
        assert_eq!(json["presentation"]["kind"], "popup");
        assert_eq!(json["trigger"]["showBadge"], true);
        assert_eq!(json["trigger"]["hoverEnabled"], false);
    }
}
