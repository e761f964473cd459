//! # Trigger Handlers
//!
//! User input on the icon button.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Header                                               [🛒 3]            │
//! │                                                          │              │
//! │        pointer enters (hover armed) ─────────────────────┤ OPEN         │
//! │        click, open-on-hover off ─────────────────────────┤ toggle       │
//! │        click, hover armed ───────────────────────────────┤ CLOSE + keep │
//! │        click, click mode ────────────────────────────────┘ re-arm hover │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use minicart_core::{InteractionState, TriggerEvent};
use tracing::debug;

use crate::state::InteractionStore;

/// Handles any trigger event against the store.
pub fn handle_trigger(store: &InteractionStore, event: TriggerEvent) -> InteractionState {
    debug!(?event, "Minicart trigger event");
    store.dispatch_planned(|state| state.actions_for(event))
}

/// Click on the icon button.
pub fn on_click(store: &InteractionStore) -> InteractionState {
    handle_trigger(store, TriggerEvent::Click)
}

/// Pointer entering the icon button.
///
/// A no-op unless hover is armed; the host should not even attach the
/// listener when [`InteractionState::hover_enabled`] is false.
pub fn on_pointer_enter(store: &InteractionStore) -> InteractionState {
    handle_trigger(store, TriggerEvent::PointerEnter)
}
