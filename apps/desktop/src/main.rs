//! FacetScope Desktop — Dioxus-powered document search.

use std::sync::Mutex;

use dioxus::prelude::*;
use facetscope_core::{load_client_config, HttpBackend};

mod app;
mod preview;
mod results;
mod search;
mod state;

use app::App;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_BACKEND: Mutex<Option<HttpBackend>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("facetscope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = load_client_config(&cwd);
    tracing::info!(base_url = config.base_url.as_str(), "Using search backend");
    let backend = match HttpBackend::new(config) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(error = %e, "Could not create backend client");
            std::process::exit(1);
        }
    };
    if let Ok(mut slot) = INITIAL_BACKEND.lock() {
        *slot = Some(backend);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((250, 250, 250, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("FacetScope")
                            .with_inner_size(LogicalSize::new(1280.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 500.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
