//! # State Module
//!
//! Per-mount state of the minicart widget.
//!
//! Instead of one ambient context that every descendant looks up, each piece
//! of state is an explicit object handed to whoever needs it:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │ InteractionStore │  │   CartSource     │  │  MinicartConfig  │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Arc<Mutex<      │  │  watch::Receiver │  │  variation       │      │
//! │  │   Interaction    │  │   <CartSnapshot> │  │  openOnHover     │      │
//! │  │   State>>        │  │                  │  │  itemCountMode   │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  • InteractionStore: cloned into child presentations; dispatch only    │
//! │  • CartSource: host publishes through CartFeed, widget reads latest    │
//! │  • MinicartConfig: read-only after mount                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod interaction;

pub use cart::{cart_channel, CartFeed, CartSource};
pub use config::MinicartConfig;
pub use interaction::InteractionStore;
