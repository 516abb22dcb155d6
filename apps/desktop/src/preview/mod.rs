//! Preview modal — carousel over the slides of the last successful preview.

use dioxus::prelude::*;
use facetscope_core::present::{slide_caption, NO_PREVIEW_MESSAGE};
use facetscope_core::Action;

use crate::state::*;

#[component]
pub fn PreviewModal() -> Element {
    let view = VIEW.read();
    let preview = &view.preview;
    if !preview.open {
        return rsx! {};
    }

    let count = preview.slides.len();
    let at_start = preview.current == 0;
    let at_end = preview.current + 1 >= count;
    let slide = preview.current_slide().cloned();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| dispatch(Action::PreviewClosed),

            div {
                class: "modal",
                onclick: move |e: Event<MouseData>| e.stop_propagation(),

                div {
                    class: "modal-header",
                    div {
                        h2 { class: "modal-title", "Document Preview" }
                        p { class: "muted", "Preview the document slides" }
                    }
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "Close",
                        onclick: move |_| dispatch(Action::PreviewClosed),
                        "\u{00D7}"
                    }
                }

                {match slide {
                    Some(slide) => rsx! {
                        div {
                            class: "carousel",
                            button {
                                class: "btn btn-outline carousel-nav",
                                disabled: at_start,
                                onclick: move |_| dispatch(Action::SlidePrevious),
                                "\u{2039}"
                            }
                            div {
                                class: "carousel-item",
                                img {
                                    class: "slide-image",
                                    src: "{slide.image_url}",
                                    alt: "Slide {slide.slide_number}",
                                }
                                p { class: "muted slide-caption", "{slide_caption(&slide, count)}" }
                            }
                            button {
                                class: "btn btn-outline carousel-nav",
                                disabled: at_end,
                                onclick: move |_| dispatch(Action::SlideNext),
                                "\u{203A}"
                            }
                        }
                    },
                    None => rsx! {
                        div {
                            class: "results-placeholder",
                            p { class: "muted", "{NO_PREVIEW_MESSAGE}" }
                        }
                    },
                }}
            }
        }
    }
}
