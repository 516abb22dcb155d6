//! Search panel — query input, search button, error banner, and facet filters.

mod filters;
mod search_input;

pub use filters::FilterPanel;
pub use search_input::SearchBar;
