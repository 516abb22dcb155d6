//! Results area — spinner, empty states, or the caption and one card per document.

mod card;
mod metadata_strip;

use dioxus::prelude::*;
use facetscope_core::present::ResultsPane;

use crate::state::*;
use card::ResultCard;
use metadata_strip::MetadataStrip;

#[component]
pub fn ResultsArea() -> Element {
    let view = VIEW.read();
    let pane = ResultsPane::of(&view);

    let body = match pane {
        ResultsPane::Loading => rsx! {
            div { class: "results-placeholder", span { class: "spinner spinner-large" } }
        },
        ResultsPane::Idle | ResultsPane::Empty => rsx! {
            div {
                class: "results-placeholder",
                p { class: "muted", "{pane.message().unwrap_or_default()}" }
            }
        },
        ResultsPane::Listing => {
            let results = view.result.as_ref().map(|r| r.results.clone()).unwrap_or_default();
            let total = view.result.as_ref().map(|r| r.total).unwrap_or(0);
            rsx! {
                div {
                    class: "results-list",
                    MetadataStrip { total }
                    for doc in results {
                        ResultCard { key: "{doc.id}", doc: doc.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "results-area", {body} }
    }
}
