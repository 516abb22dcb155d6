//! FacetScope core — state and plumbing behind the document search view.
//!
//! The search backend owns ranking, persistence and slide rendering. This crate
//! owns everything on the client side of the wire: the data model, the shared
//! facet vocabulary, the filter projection, the view reducer, and the HTTP client
//! that carries requests to the backend.
//!
//! # Modules
//!
//! - [`types`] — Documents, metadata, slides, and request/response bodies
//! - [`facets`] — Facet vocabulary shared by the filter panel and the edit form
//! - [`filters`] — Filter state and the outbound filter projection
//! - [`view`] — The `SearchView` reducer: actions, effects, sequence numbers
//! - [`present`] — Rendering decisions (captions, snippets, empty states)
//! - [`client`] — `Backend` trait, the `reqwest` implementation, and `Session`
//! - [`config`] — Client configuration from TOML files and the environment
//! - [`error`] — Error taxonomy

pub mod client;
pub mod config;
pub mod error;
pub mod facets;
pub mod filters;
pub mod present;
pub mod types;
pub mod view;

pub use client::{perform, Backend, HttpBackend, Session};
pub use config::{load_client_config, ClientConfig};
pub use error::{ClientError, ConfigError};
pub use view::{Action, Effect, SearchView};

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.facetscope` on Unix, `%APPDATA%/facetscope` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("facetscope"))
    } else {
        home_dir().map(|h| h.join(".facetscope"))
    }
}
