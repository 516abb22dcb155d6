//! Root application component — search bar, filters, results, preview modal.

use dioxus::prelude::*;

use crate::preview::PreviewModal;
use crate::results::ResultsArea;
use crate::search::{FilterPanel, SearchBar};
use crate::state::*;
use crate::INITIAL_BACKEND;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_hook(|| {
        let backend = INITIAL_BACKEND.lock().ok().and_then(|mut slot| slot.take());
        if backend.is_some() {
            *BACKEND.write() = backend;
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "page-header",
                h1 { class: "page-title", "Search" }
            }

            SearchBar {}
            FilterPanel {}
            ResultsArea {}
            PreviewModal {}
        }
    }
}
