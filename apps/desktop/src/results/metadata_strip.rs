//! Metadata strip showing the result count.

use dioxus::prelude::*;
use facetscope_core::present::caption;

#[component]
pub fn MetadataStrip(total: u64) -> Element {
    let Some(line) = caption(total) else {
        return rsx! {
            div { class: "metadata-strip hidden" }
        };
    };

    rsx! {
        div {
            class: "metadata-strip",
            span { class: "metadata-count", "{line}" }
        }
    }
}
