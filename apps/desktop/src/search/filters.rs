//! Facet filter grid. Every control is generated from the shared vocabulary.

use dioxus::prelude::*;
use facetscope_core::facets::{Facet, FacetInput};
use facetscope_core::Action;

use crate::state::*;

#[component]
pub fn FilterPanel() -> Element {
    let show = VIEW.read().show_filters;

    rsx! {
        div {
            class: if show { "filter-panel open" } else { "filter-panel" },
            div {
                class: "filter-grid",
                for facet in Facet::ALL {
                    FilterControl { key: "{facet.key()}", facet }
                }
            }
        }
    }
}

#[component]
fn FilterControl(facet: Facet) -> Element {
    let value = VIEW.read().filters.get(facet).to_string();
    let has_value = !value.is_empty();
    let on_change = move |e: Event<FormData>| {
        dispatch(Action::FilterChanged { facet, value: e.value() });
    };

    rsx! {
        div {
            class: "filter-control",
            label { class: "field-label", "{facet.label()}" }
            div {
                class: "filter-input-row",
                {match facet.input() {
                    FacetInput::Choice(choices) => rsx! {
                        select {
                            class: "select",
                            value: "{value}",
                            onchange: on_change,
                            option { value: "", disabled: true, selected: !has_value, "{facet.placeholder()}" }
                            for choice in choices.iter() {
                                option {
                                    value: "{choice.value}",
                                    selected: choice.value == value,
                                    "{choice.label}"
                                }
                            }
                        }
                    },
                    FacetInput::Text { placeholder } => rsx! {
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "{placeholder}",
                            value: "{value}",
                            oninput: on_change,
                        }
                    },
                    FacetInput::Month => rsx! {
                        input {
                            class: "input",
                            r#type: "month",
                            value: "{value}",
                            oninput: on_change,
                        }
                    },
                }}
                if has_value {
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "Clear",
                        onclick: move |_| dispatch(Action::FilterCleared(facet)),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
