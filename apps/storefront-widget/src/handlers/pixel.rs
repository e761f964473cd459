//! # Pixel Handlers
//!
//! The storefront pixel bus is an analytics side channel. The widget talks to
//! it in two directions:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  OUT: CartIdPixel                                                       │
//! │       cart snapshot ──► settled, non-empty, new id? ──► push "cartId"  │
//! │                                                                         │
//! │  IN:  custom open event                                                 │
//! │       host pixel event ──► matches configured name/id? ──► OPEN        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither direction feeds cart data into the state machine.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use minicart_core::{Action, CartSnapshot, InteractionState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::state::{InteractionStore, MinicartConfig};

/// Event name pushed when the cart id becomes known or changes.
pub const CART_ID_EVENT: &str = "cartId";

/// An event on the storefront pixel bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PixelEvent {
    /// Event name (`cartId`, `addToCart`, ...).
    pub event: String,

    /// Optional discriminator for custom events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub emitted_at: Option<DateTime<Utc>>,
}

impl PixelEvent {
    /// A named event with no payload.
    pub fn named(event: impl Into<String>) -> Self {
        PixelEvent {
            event: event.into(),
            id: None,
            cart_id: None,
            emitted_at: None,
        }
    }

    /// Sets the discriminator id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn cart_id(cart_id: &str) -> Self {
        PixelEvent {
            event: CART_ID_EVENT.to_string(),
            id: None,
            cart_id: Some(cart_id.to_string()),
            emitted_at: Some(Utc::now()),
        }
    }
}

/// Receiver of outgoing pixel events (the host's bus).
pub trait PixelSink {
    fn push(&self, event: PixelEvent);
}

impl<F> PixelSink for F
where
    F: Fn(PixelEvent),
{
    fn push(&self, event: PixelEvent) {
        self(event)
    }
}

/// Sink that keeps every event, for previews and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PixelEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded events.
    pub fn take(&self) -> Vec<PixelEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }
}

impl PixelSink for RecordingSink {
    fn push(&self, event: PixelEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

// =============================================================================
// Cart-id pixel
// =============================================================================

/// Emits `cartId` once per distinct, non-empty, settled cart id.
#[derive(Debug, Clone, Default)]
pub struct CartIdPixel {
    last_cart_id: Option<String>,
}

impl CartIdPixel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a snapshot; returns `true` when an event was pushed.
    pub fn observe(&mut self, snapshot: &CartSnapshot, sink: &dyn PixelSink) -> bool {
        let Some(cart_id) = snapshot.settled_cart_id() else {
            return false;
        };

        if cart_id.is_empty() || self.last_cart_id.as_deref() == Some(cart_id) {
            return false;
        }

        info!(cart_id, "Cart id changed, pushing pixel event");
        sink.push(PixelEvent::cart_id(cart_id));
        self.last_cart_id = Some(cart_id.to_string());
        true
    }

    pub fn last_cart_id(&self) -> Option<&str> {
        self.last_cart_id.as_deref()
    }
}

// =============================================================================
// Custom open event
// =============================================================================

/// Whether `event` is the configured "open the minicart" event.
///
/// Every configured field must match; with nothing configured, nothing does.
pub fn matches_open_event(config: &MinicartConfig, event: &PixelEvent) -> bool {
    let name = config.custom_pixel_event_name.as_deref();
    let id = config.custom_pixel_event_id.as_deref();

    if name.is_none() && id.is_none() {
        return false;
    }

    let name_matches = name.map_or(true, |name| event.event == name);
    let id_matches = id.map_or(true, |id| event.id.as_deref() == Some(id));

    name_matches && id_matches
}

/// Opens the panel when a matching custom event arrives.
///
/// Returns the new state, or `None` when the event was ignored.
pub fn on_pixel_event(
    store: &InteractionStore,
    config: &MinicartConfig,
    event: &PixelEvent,
) -> Option<InteractionState> {
    if !store.state().variation.is_expandable() || !matches_open_event(config, event) {
        return None;
    }

    debug!(event = %event.event, id = ?event.id, "Custom pixel event opens minicart");
    Some(store.dispatch(Action::OpenMinicart))
}
