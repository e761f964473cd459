//! # Preview
//!
//! Backs the `minicart-preview` binary: mount the widget against an order
//! form, replay a few trigger events, print what the host would render.
//!
//! ```text
//! MINICART_VARIATION=drawer MINICART_EVENTS=enter,click \
//!     minicart-preview order-form.json
//! ```
//!
//! ## Events (`MINICART_EVENTS`, comma separated)
//! - `click` - click on the trigger
//! - `enter` - pointer enters the trigger
//! - `open` / `close` - presentation callbacks

use std::io::Read;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{WidgetError, WidgetResult};
use crate::handlers::pixel::{PixelEvent, RecordingSink};
use crate::handlers::render::MinicartView;
use crate::state::{CartSource, MinicartConfig};
use crate::Minicart;
use minicart_core::{CartSnapshot, InteractionState, OrderForm};

/// Replayable host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    Click,
    Enter,
    Open,
    Close,
}

impl PreviewEvent {
    /// Parses a comma separated list, skipping unknown entries.
    pub fn parse_list(raw: &str) -> Vec<PreviewEvent> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match s {
                "click" => Some(PreviewEvent::Click),
                "enter" => Some(PreviewEvent::Enter),
                "open" => Some(PreviewEvent::Open),
                "close" => Some(PreviewEvent::Close),
                other => {
                    warn!(event = other, "Unknown preview event, skipping");
                    None
                }
            })
            .collect()
    }
}

/// What the binary prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOutput {
    pub state: InteractionState,
    pub view: MinicartView,
    pub pixel_events: Vec<PixelEvent>,
}

/// Mounts, replays `events`, renders.
pub fn render_preview(
    config: MinicartConfig,
    order_form: OrderForm,
    events: &[PreviewEvent],
) -> WidgetResult<PreviewOutput> {
    let mut minicart = Minicart::mount(config, CartSource::fixed(CartSnapshot::ready(order_form)))?;

    let sink = RecordingSink::new();
    minicart.observe_cart(&sink);

    let store = minicart.store();
    for event in events {
        match event {
            PreviewEvent::Click => minicart.click(),
            PreviewEvent::Enter => minicart.pointer_enter(),
            PreviewEvent::Open => store.open(),
            PreviewEvent::Close => store.close(),
        };
    }

    Ok(PreviewOutput {
        state: minicart.state(),
        view: minicart.render(),
        pixel_events: sink.take(),
    })
}

/// Binary entry point. Reads the order form from `path` or stdin.
pub fn run(path: Option<String>) -> WidgetResult<String> {
    let config = MinicartConfig::from_env();
    let events = std::env::var("MINICART_EVENTS")
        .map(|raw| PreviewEvent::parse_list(&raw))
        .unwrap_or_default();

    let raw = match &path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let order_form: OrderForm = serde_json::from_str(&raw)?;
    info!(
        source = path.as_deref().unwrap_or("<stdin>"),
        items = order_form.items.len(),
        "Loaded order form"
    );

    let output = render_preview(config, order_form, &events)?;
    serde_json::to_string_pretty(&output).map_err(WidgetError::from)
}
