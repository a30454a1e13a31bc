//! Notegrid web application
//!
//! A single-page board for writing, pinning, and searching personal notes.

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod theme;
mod views;

fn main() {
    init_logging();
    tracing::info!("Starting notegrid...");

    dioxus::launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    dioxus::logger::init(tracing::Level::INFO).ok();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notegrid_web=debug,notegrid_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
