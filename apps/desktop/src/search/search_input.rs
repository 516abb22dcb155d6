//! Query input row. Enter and the Search button submit through the same action,
//! so the view's single-flight guard covers both.

use dioxus::prelude::*;
use facetscope_core::Action;

use crate::state::*;

#[component]
pub fn SearchBar() -> Element {
    let view = VIEW.read();
    let loading = view.is_loading();
    let show_filters = view.show_filters;
    let error = view.error.clone();

    rsx! {
        div {
            class: "search-bar",

            div {
                class: "search-input-row",

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{view.query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| dispatch(Action::QueryChanged(e.value())),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            dispatch(Action::SearchSubmitted);
                        }
                    },
                }

                button {
                    class: "btn btn-primary",
                    disabled: loading,
                    onclick: move |_| dispatch(Action::SearchSubmitted),
                    if loading {
                        span { class: "spinner" }
                    } else {
                        svg {
                            class: "search-icon",
                            width: "16",
                            height: "16",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            circle { cx: "11", cy: "11", r: "8" }
                            line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                        }
                    }
                    "Search"
                }

                // Filter toggle (narrow layouts only)
                button {
                    class: if show_filters { "btn btn-outline filter-toggle active" } else { "btn btn-outline filter-toggle" },
                    title: "Filters",
                    onclick: move |_| dispatch(Action::FiltersToggled),
                    svg {
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        polygon { points: "22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" }
                    }
                }
            }

            {error.map(|error| rsx! {
                div { class: "error-banner", "{error}" }
            })}
        }
    }
}
