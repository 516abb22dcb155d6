//! Global application state using Dioxus signals.
//!
//! The whole view lives in one `SearchView`; components read it and change it
//! only through [`dispatch`], which also runs any backend call the view asks for.

use facetscope_core::{perform, Action, HttpBackend, SearchView};
use dioxus::prelude::*;

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Search, edit, and preview state.
pub static VIEW: GlobalSignal<SearchView> = Signal::global(SearchView::new);

/// Backend client — set once on first render.
pub static BACKEND: GlobalSignal<Option<HttpBackend>> = Signal::global(|| None);

/// Apply an action. If the view wants a backend call, run it in the background
/// and feed its completion back through here.
pub fn dispatch(action: Action) {
    let effect = VIEW.write().dispatch(action);
    let Some(effect) = effect else { return };

    let backend = BACKEND.read().clone();
    let Some(backend) = backend else {
        tracing::error!(?effect, "No backend configured, dropping request");
        return;
    };
    spawn(async move {
        let completion = perform(&backend, effect).await;
        dispatch(completion);
    });
}
