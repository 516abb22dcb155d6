//! Result card with inline metadata editing.
//!
//! One card at a time may be in edit mode. Its inputs write into the view's draft;
//! every other card shows stored metadata.

use dioxus::prelude::*;
use facetscope_core::facets::{edit_fields, EditField, FacetInput, COMMENT_KEY};
use facetscope_core::present::{display_value, shows_comment, snippet, stray_choice};
use facetscope_core::types::SearchResult;
use facetscope_core::Action;

use crate::state::*;

#[component]
pub fn ResultCard(doc: SearchResult) -> Element {
    let view = VIEW.read();
    let editing = view.is_editing(&doc.id);
    let updating = view.is_updating();
    let any_preview_loading = view.preview.any_loading();
    let preview_loading = view.preview.is_loading(&doc.id);
    let draft = view.edit.as_ref().filter(|_| editing).map(|e| e.draft.clone());

    let doc_id = doc.id.clone();
    let agent_id = doc.metadata.agent_id.clone();
    let edit_id = doc.id.clone();

    rsx! {
        div {
            class: "card",

            div {
                class: "card-header",
                div {
                    class: "card-heading",
                    h3 { class: "card-title", "{doc.title}" }
                    p { class: "card-description", "{snippet(&doc.text)}" }
                }
                div {
                    class: "card-actions",
                    if doc.metadata.is_client_specific() {
                        span { class: "badge", "Client Specific" }
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        disabled: any_preview_loading,
                        onclick: move |_| {
                            dispatch(Action::PreviewRequested {
                                doc_id: doc_id.clone(),
                                agent_id: agent_id.clone(),
                            })
                        },
                        "Preview"
                        if preview_loading {
                            span { class: "spinner" }
                        }
                    }
                    if editing {
                        button {
                            class: "btn btn-outline btn-sm",
                            disabled: updating,
                            onclick: move |_| dispatch(Action::EditCancelled),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary btn-sm",
                            disabled: updating,
                            onclick: move |_| dispatch(Action::SaveRequested),
                            if updating {
                                span { class: "spinner" }
                            } else {
                                "Save"
                            }
                        }
                    } else {
                        button {
                            class: "btn btn-outline btn-sm",
                            onclick: move |_| dispatch(Action::EditStarted { doc_id: edit_id.clone() }),
                            "Edit"
                        }
                    }
                }
            }

            div {
                class: "card-content metadata-grid",
                for field in edit_fields() {
                    if field.key != COMMENT_KEY || shows_comment(&doc.metadata, editing) {
                        div {
                            key: "{field.key}",
                            class: if field.key == COMMENT_KEY { "metadata-field wide" } else { "metadata-field" },
                            label { class: "field-label muted", "{field.label}" }
                            {match draft.as_ref() {
                                Some(draft) => rsx! {
                                    FieldEditor {
                                        field,
                                        value: draft.get(field.key).unwrap_or_default().to_string(),
                                    }
                                },
                                None => rsx! {
                                    p { class: "field-value", "{display_value(field.key, &doc.metadata)}" }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}

/// Input for one draft field, chosen by the field's vocabulary.
#[component]
fn FieldEditor(field: EditField, value: String) -> Element {
    let key = field.key;
    let on_change = move |e: Event<FormData>| {
        dispatch(Action::FieldChanged { field: key.to_string(), value: e.value() });
    };

    match field.input {
        FacetInput::Choice(choices) => rsx! {
            select {
                class: "select select-sm",
                value: "{value}",
                onchange: on_change,
                option { value: "", disabled: true, selected: value.is_empty(), "Select..." }
                {stray_choice(field.input, &value).map(|stray| rsx! {
                    option { value: "{stray}", selected: true, "{stray}" }
                })}
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
                class: "input input-sm",
                r#type: "text",
                placeholder,
                value: "{value}",
                oninput: on_change,
            }
        },
        FacetInput::Month => rsx! {
            input {
                class: "input input-sm",
                r#type: "month",
                value: "{value}",
                oninput: on_change,
            }
        },
    }
}
