//! # Cart Source
//!
//! The host owns the order form and refreshes it asynchronously. The widget
//! only ever needs the latest snapshot, so the boundary is a
//! `tokio::sync::watch` channel:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Host order-form fetch ──► CartFeed::publish(snapshot)                 │
//! │                                  │                                      │
//! │                            watch channel (keeps latest only)            │
//! │                                  │                                      │
//! │  Minicart::render() ◄── CartSource::snapshot()   (never blocks)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use minicart_core::{CartSnapshot, OrderForm};
use tokio::sync::watch;
use tracing::debug;

/// Creates a connected feed/source pair.
pub fn cart_channel(initial: CartSnapshot) -> (CartFeed, CartSource) {
    let (tx, rx) = watch::channel(initial);
    (CartFeed { tx }, CartSource { rx })
}

/// Host side: publishes cart snapshots.
#[derive(Debug)]
pub struct CartFeed {
    tx: watch::Sender<CartSnapshot>,
}

impl CartFeed {
    /// Replaces the current snapshot. Succeeds even with no widget mounted.
    pub fn publish(&self, snapshot: CartSnapshot) {
        debug!(
            loading = snapshot.loading,
            items = snapshot.order_form.as_ref().map_or(0, |f| f.items.len()),
            "Cart snapshot published"
        );
        self.tx.send_replace(snapshot);
    }

    /// Marks the cart as loading, keeping the last order form around.
    pub fn set_loading(&self) {
        self.tx.send_modify(|snapshot| snapshot.loading = true);
    }

    /// Publishes a settled order form.
    pub fn publish_order_form(&self, order_form: OrderForm) {
        self.publish(CartSnapshot::ready(order_form));
    }

    /// A new source reading this feed.
    pub fn subscribe(&self) -> CartSource {
        CartSource {
            rx: self.tx.subscribe(),
        }
    }
}

/// Widget side: reads the latest snapshot.
#[derive(Debug, Clone)]
pub struct CartSource {
    rx: watch::Receiver<CartSnapshot>,
}

impl CartSource {
    /// A source whose snapshot never changes.
    pub fn fixed(snapshot: CartSnapshot) -> Self {
        let (_tx, rx) = watch::channel(snapshot);
        CartSource { rx }
    }

    /// Latest snapshot. Polled once per render.
    pub fn snapshot(&self) -> CartSnapshot {
        self.rx.borrow().clone()
    }

    /// Waits for the host to publish again.
    ///
    /// Returns `false` once the feed is gone; the last snapshot stays readable.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
