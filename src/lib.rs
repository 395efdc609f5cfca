//! # sensorboard
//!
//! Leptos + WASM dashboard for monitoring simulated industrial IoT sensors,
//! behind a local email/password sign-in stored in browser storage.
//!
//! This crate contains pages, components, reactive state, the storage layer
//! and the session service. Everything except the browser glue compiles
//! natively so the unit tests run under plain `cargo test`; the `csr`
//! feature enables the WASM entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod store;
pub mod types;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_build_env();
    if console_log::init_with_level(config.log_level).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    log::info!("sensorboard starting");

    leptos::mount::mount_to_body(move || view! { <app::App config=config/> });
}
