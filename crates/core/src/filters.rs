//! Filter state for the eight facets and the projection sent to the backend.

use std::collections::BTreeMap;

use crate::facets::Facet;

/// Filter value meaning "explicitly unset". Never sent to the backend.
pub const NONE_SENTINEL: &str = "_none";

/// Fixed-shape filter mapping: every facet is always present, and an empty
/// string means unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<Facet, String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { values: Facet::ALL.into_iter().map(|f| (f, String::new())).collect() }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, facet: Facet) -> &str {
        self.values.get(&facet).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        self.values.insert(facet, value.into());
    }

    pub fn clear(&mut self, facet: Facet) {
        self.values.insert(facet, String::new());
    }

    /// True when the facet would be included in the outbound projection.
    pub fn is_set(&self, facet: Facet) -> bool {
        is_active(self.get(facet))
    }

    /// Iterate facets in panel order with their current values.
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Outbound filter mapping: only non-empty, non-sentinel entries, keyed by
    /// wire key, values passed through untouched (`is_client_specific` stays the
    /// literal `"True"` / `"False"`).
    pub fn active_filters(&self) -> BTreeMap<String, String> {
        self.iter()
            .filter(|(_, value)| is_active(value))
            .map(|(facet, value)| (facet.key().to_string(), value.to_string()))
            .collect()
    }
}

fn is_active(value: &str) -> bool {
    !value.is_empty() && value != NONE_SENTINEL
}
