//! # Storefront Widget Library
//!
//! Host-facing layer of the minicart: mounts the widget, owns its per-mount
//! state and turns host events into state-machine dispatches.
//!
//! ## Module Organization
//! ```text
//! storefront_widget/
//! ├── lib.rs          ◄─── You are here (Minicart mount, tracing setup)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── interaction.rs  ◄─── InteractionStore (dispatch)
//! │   ├── cart.rs         ◄─── CartFeed / CartSource (watch channel)
//! │   └── config.rs       ◄─── MinicartConfig
//! ├── handlers/
//! │   ├── trigger.rs  ◄─── click / pointer-enter
//! │   ├── render.rs   ◄─── MinicartView
//! │   └── pixel.rs    ◄─── cart-id pixel, custom open event
//! ├── preview.rs      ◄─── minicart-preview binary logic
//! └── error.rs        ◄─── WidgetError
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mount(config, cart) ──► validate ──► seed InteractionState            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  click / pointer_enter / pixel event ──► dispatch                      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  render() ──► poll CartSource ──► MinicartView ──► host renderer       │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  drop ──► state discarded (nothing persists)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use storefront_widget::state::{cart_channel, MinicartConfig};
//! use storefront_widget::Minicart;
//! use minicart_core::{Availability, CartItem, CartSnapshot, OrderForm};
//!
//! let (feed, cart) = cart_channel(CartSnapshot::loading());
//! let minicart = Minicart::mount(MinicartConfig::default(), cart).unwrap();
//! assert_eq!(minicart.render().trigger.unwrap().quantity, 0);
//!
//! feed.publish_order_form(OrderForm::new(
//!     "of-1",
//!     vec![CartItem::new("1", 2, Availability::Available)],
//! ));
//! minicart.click();
//! let view = minicart.render();
//! assert!(view.content_visible);
//! assert_eq!(view.trigger.unwrap().quantity, 1);
//! ```

pub mod error;
pub mod handlers;
pub mod preview;
pub mod state;

use minicart_core::variation::PresentationSettings;
use minicart_core::InteractionState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::WidgetResult;
use handlers::pixel::{CartIdPixel, PixelEvent, PixelSink};
use handlers::render::MinicartView;
use state::{CartSource, InteractionStore, MinicartConfig};

/// A mounted minicart.
#[derive(Debug)]
pub struct Minicart {
    config: MinicartConfig,
    settings: PresentationSettings,
    store: InteractionStore,
    cart: CartSource,
    cart_id_pixel: CartIdPixel,
}

impl Minicart {
    /// Validates `config` and seeds the interaction state.
    pub fn mount(config: MinicartConfig, cart: CartSource) -> WidgetResult<Self> {
        config.validate()?;

        let store = InteractionStore::new(config.variation, config.open_on_hover);
        let settings = config.presentation_settings();

        info!(
            variation = %config.variation,
            open_on_hover = config.open_on_hover,
            count_mode = config.item_count_mode.as_str(),
            "Minicart mounted"
        );

        Ok(Minicart {
            config,
            settings,
            store,
            cart,
            cart_id_pixel: CartIdPixel::new(),
        })
    }

    pub fn config(&self) -> &MinicartConfig {
        &self.config
    }

    /// Store handle for child presentations.
    pub fn store(&self) -> InteractionStore {
        self.store.clone()
    }

    pub fn state(&self) -> InteractionState {
        self.store.state()
    }

    /// Click on the trigger.
    pub fn click(&self) -> InteractionState {
        handlers::trigger::on_click(&self.store)
    }

    /// Pointer entering the trigger.
    pub fn pointer_enter(&self) -> InteractionState {
        handlers::trigger::on_pointer_enter(&self.store)
    }

    /// Forwards a host pixel event; opens on the configured custom event.
    pub fn receive_pixel_event(&self, event: &PixelEvent) -> Option<InteractionState> {
        handlers::pixel::on_pixel_event(&self.store, &self.config, event)
    }

    /// Runs the cart-id pixel against the latest cart snapshot.
    pub fn observe_cart(&mut self, sink: &dyn PixelSink) -> bool {
        let snapshot = self.cart.snapshot();
        self.cart_id_pixel.observe(&snapshot, sink)
    }

    /// View plan for the current state and latest cart snapshot.
    pub fn render(&self) -> MinicartView {
        let snapshot = self.cart.snapshot();
        handlers::render::render(&self.store.state(), &self.config, &self.settings, &snapshot)
    }
}

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,minicart_core=debug,storefront_widget=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched action
/// - Default: [`DEFAULT_LOG_FILTER`] (INFO, DEBUG for the minicart crates)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr so the preview's JSON stays clean on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
