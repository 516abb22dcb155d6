//! Rendering decisions shared by every front end: which pane to show, captions,
//! snippets, and display labels.

use std::borrow::Cow;

use crate::facets::{edit_field, FacetInput, COMMENT_KEY};
use crate::types::{Metadata, PreviewSlide};
use crate::view::SearchView;

/// Snippet length, in characters, before the card text is cut.
pub const SNIPPET_CHARS: usize = 200;

pub const IDLE_MESSAGE: &str =
    "No results yet. Use the search bar and filters above to find documents.";
pub const EMPTY_MESSAGE: &str = "No results found. Try adjusting your search or filters.";
pub const NO_PREVIEW_MESSAGE: &str = "No preview available";

/// What the results area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsPane {
    /// A search is outstanding; spinner only.
    Loading,
    /// Nothing searched yet.
    Idle,
    /// The last search reported `total == 0`.
    Empty,
    /// Caption plus one card per result.
    Listing,
}

impl ResultsPane {
    pub fn of(view: &SearchView) -> Self {
        if view.is_loading() {
            return ResultsPane::Loading;
        }
        match &view.result {
            None => ResultsPane::Idle,
            Some(r) if r.total == 0 => ResultsPane::Empty,
            Some(_) => ResultsPane::Listing,
        }
    }

    /// Placeholder text for the non-listing panes.
    pub fn message(self) -> Option<&'static str> {
        match self {
            ResultsPane::Idle => Some(IDLE_MESSAGE),
            ResultsPane::Empty => Some(EMPTY_MESSAGE),
            ResultsPane::Loading | ResultsPane::Listing => None,
        }
    }
}

/// "Found N documents" line above the cards. Nothing for zero.
pub fn caption(total: u64) -> Option<String> {
    match total {
        0 => None,
        1 => Some("Found 1 document".to_string()),
        n => Some(format!("Found {n} documents")),
    }
}

/// Card body: the first [`SNIPPET_CHARS`] characters, with an ellipsis when cut.
pub fn snippet(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Value shown on a card for a metadata key, using the vocabulary's labels
/// (so `is_client_specific` reads "Yes" / "No").
pub fn display_value<'a>(key: &str, metadata: &'a Metadata) -> &'a str {
    let raw = metadata.get(key).unwrap_or("");
    if key == "is_client_specific" {
        return if metadata.is_client_specific() { "Yes" } else { "No" };
    }
    match edit_field(key) {
        Some(field) => field.input.label_for(raw),
        None => raw,
    }
}

/// A stored value a choice editor must still offer because the vocabulary
/// lacks it. Empty values get the blank placeholder instead.
pub fn stray_choice(input: FacetInput, value: &str) -> Option<&str> {
    match input {
        FacetInput::Choice(_) if !value.is_empty() && !input.accepts(value) => Some(value),
        _ => None,
    }
}

/// Whether a card shows the comment row.
pub fn shows_comment(metadata: &Metadata, editing: bool) -> bool {
    editing || metadata.get(COMMENT_KEY).is_some_and(|c| !c.is_empty())
}

/// "Slide n/N" under each carousel image.
pub fn slide_caption(slide: &PreviewSlide, count: usize) -> String {
    format!("Slide {}/{}", slide.slide_number, count)
}
