//! # minicart-preview
//!
//! Mounts the minicart against an order form and prints the view plan.
//!
//! ## Usage
//! ```text
//! minicart-preview [order-form.json]      # reads stdin without a path
//! ```
//! Configuration comes from `MINICART_*` environment variables, events to
//! replay from `MINICART_EVENTS` (see `storefront_widget::preview`).

use std::process::ExitCode;

fn main() -> ExitCode {
    storefront_widget::init_tracing();

    match storefront_widget::preview::run(std::env::args().nth(1)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let body = serde_json::to_string(&err).unwrap_or_else(|_| err.to_string());
            eprintln!("{}", body);
            ExitCode::FAILURE
        }
    }
}
