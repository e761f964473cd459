//! # Interaction Store
//!
//! Owns the single `InteractionState` of a mounted widget and is the only
//! way to change it.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Trigger click ──► handlers::trigger ──► dispatch_planned(..) ──┐      │
//! │                                                                 │      │
//! │  Drawer backdrop ──► store.close() ──► dispatch(CLOSE) ─────────┤      │
//! │                                                                 ▼      │
//! │                                          lock ─► reduce ─► unlock      │
//! │                                                                         │
//! │  A planned sequence (CLOSE, SET(hover)) is reduced under ONE lock:     │
//! │  nothing can observe or interleave with the intermediate state.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use minicart_core::{Action, InteractionState, Variation};
use tracing::debug;

/// Cloneable handle to the widget's interaction state.
///
/// Clones share the same state, so a child presentation holding a clone sees
/// and drives the same panel as the trigger.
#[derive(Debug, Clone)]
pub struct InteractionStore {
    state: Arc<Mutex<InteractionState>>,
}

impl InteractionStore {
    /// Seeds the store from mount-time configuration.
    pub fn new(variation: Variation, open_on_hover: bool) -> Self {
        InteractionStore {
            state: Arc::new(Mutex::new(InteractionState::new(variation, open_on_hover))),
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> InteractionState {
        *self.lock()
    }

    /// Applies one action and returns the resulting state.
    pub fn dispatch(&self, action: Action) -> InteractionState {
        self.dispatch_all(&[action])
    }

    /// Applies `actions` in order under a single lock acquisition.
    pub fn dispatch_all(&self, actions: &[Action]) -> InteractionState {
        let mut state = self.lock();
        apply(&mut state, actions);
        *state
    }

    /// Plans the actions from the current state and applies them atomically.
    ///
    /// Used by handlers whose actions depend on the state they run against
    /// (the click toggle reads `open`).
    pub fn dispatch_planned<F>(&self, plan: F) -> InteractionState
    where
        F: FnOnce(&InteractionState) -> &'static [Action],
    {
        let mut state = self.lock();
        let actions = plan(&state);
        apply(&mut state, actions);
        *state
    }

    /// Callback for presentations: open the panel.
    pub fn open(&self) -> InteractionState {
        self.dispatch(Action::OpenMinicart)
    }

    /// Callback for presentations: close the panel (backdrop, escape key).
    pub fn close(&self) -> InteractionState {
        self.dispatch(Action::CloseMinicart)
    }

    // The state is Copy and every reduce step leaves it valid, so a poisoned
    // lock still holds a usable value.
    fn lock(&self) -> MutexGuard<'_, InteractionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn apply(state: &mut InteractionState, actions: &[Action]) {
    for action in actions {
        *state = state.reduce(*action);
        debug!(
            ?action,
            open = state.open,
            behavior = %state.open_behavior,
            "Minicart action applied"
        );
    }
}
