//! Core types shared across FacetScope: document metadata, search results,
//! preview slides, and the JSON bodies exchanged with the search backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Document metadata
// ---------------------------------------------------------------------------

/// Metadata keys every document carries.
pub const REQUIRED_METADATA_KEYS: [&str; 9] = [
    "agent_id",
    "artifact_type",
    "business_date",
    "client_name",
    "industry",
    "is_client_specific",
    "language",
    "purpose",
    "topic",
];

/// Metadata attached to a document: the required facet keys plus whatever else
/// the backend stores (e.g. `comment`).
///
/// Every key is addressable by name through [`Metadata::get`] and [`Metadata::set`],
/// which is how edit drafts are mutated one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub agent_id: String,
    pub artifact_type: String,
    pub business_date: String,
    pub client_name: String,
    pub industry: String,
    /// Literal `"True"` / `"False"`; never coerced to a boolean.
    pub is_client_specific: String,
    pub language: String,
    pub purpose: String,
    pub topic: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Metadata {
    /// Look up a key by name. Non-string extra values read as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "agent_id" => Some(&self.agent_id),
            "artifact_type" => Some(&self.artifact_type),
            "business_date" => Some(&self.business_date),
            "client_name" => Some(&self.client_name),
            "industry" => Some(&self.industry),
            "is_client_specific" => Some(&self.is_client_specific),
            "language" => Some(&self.language),
            "purpose" => Some(&self.purpose),
            "topic" => Some(&self.topic),
            _ => self.extra.get(key).and_then(Value::as_str),
        }
    }

    /// Overwrite a key by name. Unknown keys land in `extra` as strings.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match key {
            "agent_id" => self.agent_id = value,
            "artifact_type" => self.artifact_type = value,
            "business_date" => self.business_date = value,
            "client_name" => self.client_name = value,
            "industry" => self.industry = value,
            "is_client_specific" => self.is_client_specific = value,
            "language" => self.language = value,
            "purpose" => self.purpose = value,
            "topic" => self.topic = value,
            _ => {
                self.extra.insert(key.to_string(), Value::String(value));
            }
        }
    }

    pub fn is_client_specific(&self) -> bool {
        self.is_client_specific == "True"
    }

    pub fn comment(&self) -> Option<&str> {
        self.get("comment").filter(|c| !c.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A single document returned by the backend. `id` is the identity used for
/// edit targeting; uniqueness within a result set is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub text: String,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    /// Server-defined count; only drives the caption and the empty branch.
    pub total: u64,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub applied_filters: BTreeMap<String, Value>,
}

impl SearchResponse {
    pub fn find(&self, id: &str) -> Option<&SearchResult> {
        self.results.iter().find(|doc| doc.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut SearchResult> {
        self.results.iter_mut().find(|doc| doc.id == id)
    }
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub filters: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Body of `POST /api/update-document`. The backend wants the full document,
/// so the current `text` travels with the new metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub doc_id: String,
    pub metadata: Metadata,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// One rendered slide of a document preview, in backend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSlide {
    pub slide_number: u32,
    pub image_url: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

/// Body of `POST /api/preview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub agent_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub preview_data: Option<Vec<PreviewSlide>>,
}

impl PreviewResponse {
    /// Slides to show, if the response is usable. Anything other than
    /// `success: true` with a `preview_data` list yields `None`.
    pub fn into_slides(self) -> Option<Vec<PreviewSlide>> {
        if self.success {
            self.preview_data
        } else {
            None
        }
    }
}
