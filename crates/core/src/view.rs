//! The search view as an explicit state machine.
//!
//! All UI state lives in one [`SearchView`]. Every user interaction and every
//! backend completion is an [`Action`]; [`SearchView::dispatch`] applies it and
//! may hand back one [`Effect`] describing a backend call to make. Running the
//! effect is someone else's job (see [`crate::client::perform`]), which keeps
//! every transition testable without a renderer or a network.
//!
//! Each request category (search, update, preview) has its own monotonic
//! sequence counter. A completion whose sequence number is not the one currently
//! pending is stale and is dropped, so a slow response can never overwrite the
//! state produced by a newer one.

use tracing::{debug, info, warn};

use crate::error::DOCUMENT_NOT_FOUND;
use crate::facets::Facet;
use crate::filters::FilterState;
use crate::types::{
    Metadata, PreviewRequest, PreviewResponse, PreviewSlide, SearchRequest, SearchResponse,
    UpdateRequest,
};

// ---------------------------------------------------------------------------
// Request sequencing
// ---------------------------------------------------------------------------

/// Sequence number of one request within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seq(u64);

/// One request category: the last issued number and the one still awaited.
#[derive(Debug, Default, Clone)]
struct Channel {
    last: u64,
    pending: Option<u64>,
}

impl Channel {
    fn begin(&mut self) -> Seq {
        self.last += 1;
        self.pending = Some(self.last);
        Seq(self.last)
    }

    fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a completion. Returns false (and changes nothing) when stale.
    fn settle(&mut self, seq: Seq) -> bool {
        if self.pending == Some(seq.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Actions and effects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    QueryChanged(String),
    FilterChanged { facet: Facet, value: String },
    FilterCleared(Facet),
    FiltersToggled,
    /// Search button or Enter in the query field. Both paths land here.
    SearchSubmitted,
    SearchSucceeded { seq: Seq, response: SearchResponse },
    SearchFailed { seq: Seq, message: String },

    EditStarted { doc_id: String },
    FieldChanged { field: String, value: String },
    EditCancelled,
    SaveRequested,
    /// `metadata` is the draft that was submitted.
    SaveSucceeded { seq: Seq, doc_id: String, metadata: Metadata },
    SaveFailed { seq: Seq, message: String },

    PreviewRequested { doc_id: String, agent_id: String },
    PreviewLoaded { seq: Seq, response: PreviewResponse },
    PreviewFailed { seq: Seq, message: String },
    PreviewClosed,
    SlideNext,
    SlidePrevious,
}

/// A backend call the view wants made.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Search { seq: Seq, request: SearchRequest },
    UpdateDocument { seq: Seq, request: UpdateRequest },
    Preview { seq: Seq, request: PreviewRequest },
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The single document in edit mode and its staged metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub doc_id: String,
    pub draft: Metadata,
}

#[derive(Debug, Default, Clone)]
pub struct PreviewState {
    pub open: bool,
    /// Left stale after close until the next successful preview.
    pub slides: Vec<PreviewSlide>,
    /// Carousel position.
    pub current: usize,
    /// Document whose preview request is outstanding.
    loading_doc: Option<String>,
}

impl PreviewState {
    pub fn is_loading(&self, doc_id: &str) -> bool {
        self.loading_doc.as_deref() == Some(doc_id)
    }

    /// Any preview outstanding. Disables every preview button.
    pub fn any_loading(&self) -> bool {
        self.loading_doc.is_some()
    }

    pub fn current_slide(&self) -> Option<&PreviewSlide> {
        self.slides.get(self.current)
    }
}

#[derive(Debug, Default, Clone)]
pub struct SearchView {
    pub query: String,
    pub filters: FilterState,
    /// Filter panel visibility on narrow layouts.
    pub show_filters: bool,
    /// Last successful response. Survives failed searches.
    pub result: Option<SearchResponse>,
    /// Banner text for the last search or save failure.
    pub error: Option<String>,
    pub edit: Option<EditSession>,
    pub preview: PreviewState,
    search: Channel,
    update: Channel,
    preview_req: Channel,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A search is outstanding.
    pub fn is_loading(&self) -> bool {
        self.search.in_flight()
    }

    /// A save is outstanding.
    pub fn is_updating(&self) -> bool {
        self.update.in_flight()
    }

    pub fn is_editing(&self, doc_id: &str) -> bool {
        self.edit.as_ref().is_some_and(|e| e.doc_id == doc_id)
    }

    /// The request the next search would send.
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest { query: self.query.clone(), filters: self.filters.active_filters() }
    }

    /// Apply an action. Returns the backend call to make, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::QueryChanged(query) => {
                self.query = query;
                None
            }
            Action::FilterChanged { facet, value } => {
                self.filters.set(facet, value);
                None
            }
            Action::FilterCleared(facet) => {
                self.filters.clear(facet);
                None
            }
            Action::FiltersToggled => {
                self.show_filters = !self.show_filters;
                None
            }
            Action::SearchSubmitted => self.submit_search(),
            Action::SearchSucceeded { seq, response } => {
                if !self.search.settle(seq) {
                    debug!(?seq, "Dropping stale search response");
                    return None;
                }
                info!(total = response.total, returned = response.results.len(), "Search complete");
                self.result = Some(response);
                None
            }
            Action::SearchFailed { seq, message } => {
                if !self.search.settle(seq) {
                    debug!(?seq, "Dropping stale search failure");
                    return None;
                }
                warn!(error = %message, "Search failed");
                self.error = Some(message);
                None
            }

            Action::EditStarted { doc_id } => {
                self.start_edit(doc_id);
                None
            }
            Action::FieldChanged { field, value } => {
                match self.edit.as_mut() {
                    Some(edit) => edit.draft.set(&field, value),
                    None => debug!(field = field.as_str(), "Field change with no document in edit mode"),
                }
                None
            }
            Action::EditCancelled => {
                self.edit = None;
                None
            }
            Action::SaveRequested => self.request_save(),
            Action::SaveSucceeded { seq, doc_id, metadata } => {
                if !self.update.settle(seq) {
                    debug!(?seq, "Dropping stale update response");
                    return None;
                }
                // Optimistic: the submitted draft becomes the stored metadata.
                match self.result.as_mut().and_then(|r| r.find_mut(&doc_id)) {
                    Some(doc) => doc.metadata = metadata,
                    None => debug!(doc_id = doc_id.as_str(), "Saved document no longer in results"),
                }
                if self.is_editing(&doc_id) {
                    self.edit = None;
                }
                None
            }
            Action::SaveFailed { seq, message } => {
                if !self.update.settle(seq) {
                    debug!(?seq, "Dropping stale update failure");
                    return None;
                }
                warn!(error = %message, "Update failed");
                self.error = Some(message);
                None
            }

            Action::PreviewRequested { doc_id, agent_id } => self.request_preview(doc_id, agent_id),
            Action::PreviewLoaded { seq, response } => {
                if !self.settle_preview(seq) {
                    return None;
                }
                match response.into_slides() {
                    Some(slides) => {
                        self.preview.slides = slides;
                        self.preview.current = 0;
                        self.preview.open = true;
                    }
                    None => warn!("Preview response had no slides"),
                }
                None
            }
            Action::PreviewFailed { seq, message } => {
                if self.settle_preview(seq) {
                    warn!(error = %message, "Error loading preview");
                }
                None
            }
            Action::PreviewClosed => {
                self.preview.open = false;
                None
            }
            Action::SlideNext => {
                if self.preview.current + 1 < self.preview.slides.len() {
                    self.preview.current += 1;
                }
                None
            }
            Action::SlidePrevious => {
                self.preview.current = self.preview.current.saturating_sub(1);
                None
            }
        }
    }

    fn submit_search(&mut self) -> Option<Effect> {
        if self.search.in_flight() {
            debug!("Search already in flight, ignoring submit");
            return None;
        }
        // Empty queries are allowed: filter-only browsing.
        self.error = None;
        let request = self.search_request();
        let seq = self.search.begin();
        debug!(?seq, query = request.query.as_str(), filters = request.filters.len(), "Submitting search");
        Some(Effect::Search { seq, request })
    }

    fn start_edit(&mut self, doc_id: String) {
        let Some(doc) = self.result.as_ref().and_then(|r| r.find(&doc_id)) else {
            debug!(doc_id = doc_id.as_str(), "Edit requested for unknown document");
            return;
        };
        if let Some(previous) = &self.edit {
            if previous.doc_id != doc_id {
                debug!(abandoned = previous.doc_id.as_str(), "Switching edit target, draft discarded");
            }
        }
        self.edit = Some(EditSession { doc_id, draft: doc.metadata.clone() });
    }

    fn request_save(&mut self) -> Option<Effect> {
        let edit = self.edit.as_ref()?;
        if self.update.in_flight() {
            debug!("Update already in flight, ignoring save");
            return None;
        }
        let Some(doc) = self.result.as_ref().and_then(|r| r.find(&edit.doc_id)) else {
            warn!(doc_id = edit.doc_id.as_str(), "Cannot save, document left the result set");
            self.error = Some(DOCUMENT_NOT_FOUND.to_string());
            return None;
        };
        let request = UpdateRequest {
            doc_id: edit.doc_id.clone(),
            metadata: edit.draft.clone(),
            text: doc.text.clone(),
        };
        let seq = self.update.begin();
        Some(Effect::UpdateDocument { seq, request })
    }

    fn request_preview(&mut self, doc_id: String, agent_id: String) -> Option<Effect> {
        if self.preview.any_loading() {
            debug!(doc_id = doc_id.as_str(), "Preview already loading, ignoring request");
            return None;
        }
        let seq = self.preview_req.begin();
        self.preview.loading_doc = Some(doc_id);
        Some(Effect::Preview { seq, request: PreviewRequest { agent_id } })
    }

    fn settle_preview(&mut self, seq: Seq) -> bool {
        if !self.preview_req.settle(seq) {
            debug!(?seq, "Dropping stale preview response");
            return false;
        }
        self.preview.loading_doc = None;
        true
    }
}
