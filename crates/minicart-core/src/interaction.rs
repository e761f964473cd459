//! # Interaction State Machine
//!
//! Open/closed lifecycle of the minicart panel plus arbitration between the
//! click and hover channels.
//!
//! ## Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action                      Effect                                     │
//! │  ──────────────────────────  ─────────────────────────────────────────  │
//! │  OPEN_MINICART               open ← true                                │
//! │  CLOSE_MINICART              open ← false                               │
//! │  SET_OPEN_BEHAVIOR(value)    open_behavior ← value                      │
//! │                              (hover clamps to click when the widget    │
//! │                               was mounted without open-on-hover)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trigger Events → Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  event          open_on_hover  behavior  open   actions                 │
//! │  ─────────────  ─────────────  ────────  ─────  ──────────────────────  │
//! │  Click          false          *         false  OPEN                    │
//! │  Click          false          *         true   CLOSE                   │
//! │  Click          true           hover     *      CLOSE, SET(hover)       │
//! │  Click          true           click     *      SET(hover)              │
//! │  PointerEnter   *              hover     *      OPEN                    │
//! │  PointerEnter   *              click     *      (disabled)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no terminal state and no pointer-leave transition: closing when
//! the pointer leaves is up to the presentation (backdrop, escape key).

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::types::{OpenBehavior, Variation};

// =============================================================================
// Actions & Events
// =============================================================================

/// A state transition request.
///
/// Serialized in the `{ "type": ..., "value": ... }` shape presentation
/// components send back from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Action {
    OpenMinicart,
    CloseMinicart,
    SetOpenBehavior(OpenBehavior),
}

/// User input on the trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum TriggerEvent {
    Click,
    PointerEnter,
}

const OPEN: &[Action] = &[Action::OpenMinicart];
const CLOSE: &[Action] = &[Action::CloseMinicart];
const DISMISS_KEEP_HOVER: &[Action] = &[
    Action::CloseMinicart,
    Action::SetOpenBehavior(OpenBehavior::Hover),
];
const REARM_HOVER: &[Action] = &[Action::SetOpenBehavior(OpenBehavior::Hover)];
const NONE: &[Action] = &[];

// =============================================================================
// Interaction State
// =============================================================================

/// Per-mount interaction state.
///
/// ## Invariants
/// - `open_behavior` is `Hover` only if `open_on_hover` is true
/// - `open` does not gate content when `variation` is `AlwaysOpen`
/// - `variation` and `open_on_hover` never change after mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InteractionState {
    pub open: bool,
    pub open_behavior: OpenBehavior,
    pub open_on_hover: bool,
    pub variation: Variation,
}

impl InteractionState {
    /// Initial state at mount: closed, hover-armed iff hover is allowed.
    pub fn new(variation: Variation, open_on_hover: bool) -> Self {
        let open_behavior = if open_on_hover {
            OpenBehavior::Hover
        } else {
            OpenBehavior::Click
        };

        InteractionState {
            open: false,
            open_behavior,
            open_on_hover,
            variation,
        }
    }

    /// Applies one action. Every action is valid in every state.
    #[must_use]
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::OpenMinicart => InteractionState { open: true, ..self },
            Action::CloseMinicart => InteractionState { open: false, ..self },
            Action::SetOpenBehavior(OpenBehavior::Hover) if !self.open_on_hover => {
                debug!("hover behavior requested while open-on-hover is off; keeping click");
                InteractionState {
                    open_behavior: OpenBehavior::Click,
                    ..self
                }
            }
            Action::SetOpenBehavior(value) => InteractionState {
                open_behavior: value,
                ..self
            },
        }
    }

    /// Actions a trigger event produces in this state, in dispatch order.
    pub fn actions_for(&self, event: TriggerEvent) -> &'static [Action] {
        match (event, self.open_on_hover, self.open_behavior) {
            (TriggerEvent::Click, false, _) => {
                if self.open {
                    CLOSE
                } else {
                    OPEN
                }
            }
            (TriggerEvent::Click, true, OpenBehavior::Hover) => DISMISS_KEEP_HOVER,
            (TriggerEvent::Click, true, OpenBehavior::Click) => REARM_HOVER,
            (TriggerEvent::PointerEnter, _, OpenBehavior::Hover) => OPEN,
            (TriggerEvent::PointerEnter, _, OpenBehavior::Click) => NONE,
        }
    }

    /// State × event → state.
    #[must_use]
    pub fn transition(self, event: TriggerEvent) -> Self {
        self.actions_for(event)
            .iter()
            .fold(self, |state, action| state.reduce(*action))
    }

    /// Whether the pointer-enter handler is attached.
    #[inline]
    pub fn hover_enabled(&self) -> bool {
        self.open_behavior == OpenBehavior::Hover
    }

    /// Whether the panel content should be on screen.
    ///
    /// `AlwaysOpen` ignores `open`; `Link` has no panel.
    pub fn content_visible(&self) -> bool {
        match self.variation {
            Variation::AlwaysOpen => true,
            Variation::Link => false,
            Variation::Drawer | Variation::Popup => self.open,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BEHAVIORS: [OpenBehavior; 2] = [OpenBehavior::Click, OpenBehavior::Hover];

    fn state(open: bool, behavior: OpenBehavior, open_on_hover: bool) -> InteractionState {
        InteractionState {
            open,
            open_behavior: behavior,
            open_on_hover,
            variation: Variation::Popup,
        }
    }

    #[test]
    fn test_initial_state() {
        let click = InteractionState::new(Variation::Drawer, false);
        assert!(!click.open);
        assert_eq!(click.open_behavior, OpenBehavior::Click);

        let hover = InteractionState::new(Variation::Drawer, true);
        assert!(!hover.open);
        assert_eq!(hover.open_behavior, OpenBehavior::Hover);
    }

    #[test]
    fn test_click_toggles_without_hover() {
        // open_behavior can only be Click here, but the toggle must not care
        for behavior in BEHAVIORS {
            for open in [false, true] {
                let before = state(open, behavior, false);
                let after = before.transition(TriggerEvent::Click);
                assert_eq!(after.open, !open, "behavior {behavior}, open {open}");
            }
        }

        let mut s = InteractionState::new(Variation::Popup, false);
        for expected in [true, false, true, false] {
            s = s.transition(TriggerEvent::Click);
            assert_eq!(s.open, expected);
        }
    }

    #[test]
    fn test_click_in_hover_mode_closes_and_keeps_hover() {
        for open in [false, true] {
            let after = state(open, OpenBehavior::Hover, true).transition(TriggerEvent::Click);
            assert!(!after.open);
            assert_eq!(after.open_behavior, OpenBehavior::Hover);
        }
    }

    #[test]
    fn test_click_in_click_mode_rearms_hover() {
        for open in [false, true] {
            let after = state(open, OpenBehavior::Click, true).transition(TriggerEvent::Click);
            assert_eq!(after.open, open);
            assert_eq!(after.open_behavior, OpenBehavior::Hover);
        }
    }

    #[test]
    fn test_click_action_order() {
        let s = state(true, OpenBehavior::Hover, true);
        assert_eq!(
            s.actions_for(TriggerEvent::Click),
            &[
                Action::CloseMinicart,
                Action::SetOpenBehavior(OpenBehavior::Hover)
            ]
        );
    }

    #[test]
    fn test_pointer_enter_only_opens_in_hover_mode() {
        let armed = state(false, OpenBehavior::Hover, true);
        assert!(armed.hover_enabled());
        assert!(armed.transition(TriggerEvent::PointerEnter).open);

        let disarmed = state(false, OpenBehavior::Click, true);
        assert!(!disarmed.hover_enabled());
        assert!(disarmed.actions_for(TriggerEvent::PointerEnter).is_empty());
        assert_eq!(disarmed.transition(TriggerEvent::PointerEnter), disarmed);

        let no_hover = InteractionState::new(Variation::Drawer, false);
        assert!(no_hover.actions_for(TriggerEvent::PointerEnter).is_empty());
    }

    #[test]
    fn test_close_is_idempotent() {
        let s = InteractionState::new(Variation::Popup, false)
            .reduce(Action::OpenMinicart)
            .reduce(Action::CloseMinicart)
            .reduce(Action::CloseMinicart);
        assert!(!s.open);
    }

    #[test]
    fn test_hover_behavior_clamped_without_open_on_hover() {
        let s = InteractionState::new(Variation::Popup, false)
            .reduce(Action::SetOpenBehavior(OpenBehavior::Hover));
        assert_eq!(s.open_behavior, OpenBehavior::Click);

        let s = InteractionState::new(Variation::Popup, true)
            .reduce(Action::SetOpenBehavior(OpenBehavior::Click))
            .reduce(Action::SetOpenBehavior(OpenBehavior::Hover));
        assert_eq!(s.open_behavior, OpenBehavior::Hover);
    }

    #[test]
    fn test_always_open_ignores_open_flag() {
        let mut s = InteractionState::new(Variation::AlwaysOpen, false);
        assert!(s.content_visible());
        for event in [TriggerEvent::Click, TriggerEvent::Click, TriggerEvent::PointerEnter] {
            s = s.transition(event);
            assert!(s.content_visible());
        }
        assert!(s.reduce(Action::CloseMinicart).content_visible());
    }

    #[test]
    fn test_link_never_shows_content() {
        let s = InteractionState::new(Variation::Link, false).reduce(Action::OpenMinicart);
        assert!(!s.content_visible());
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_string(&Action::SetOpenBehavior(OpenBehavior::Hover)).unwrap();
        assert_eq!(json, r#"{"type":"SET_OPEN_BEHAVIOR","value":"hover"}"#);

        let action: Action = serde_json::from_str(r#"{"type":"CLOSE_MINICART"}"#).unwrap();
        assert_eq!(action, Action::CloseMinicart);
    }
}
