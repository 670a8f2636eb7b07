//! Coursedeck Client
//!
//! Yew WASM frontend that renders a course deck and drives full-viewport
//! section scrolling.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "coursedeck-client only supports wasm32 target. Use: cargo check -p coursedeck-client --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod config;
mod dom;
mod hooks;
mod pages;
mod routes;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Initialize custom panic hook that redirects to panic page
    pages::set_panic_hook();

    let filter = EnvFilter::new("info,coursedeck_core=debug,coursedeck_client=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
