//! Error taxonomy for the client side of the search backend.
//!
//! Network and HTTP failures become [`ClientError`]; everything the view shows
//! is the `Display` form of one of these, or the local "Document not found".

use std::path::PathBuf;

use reqwest::StatusCode;

/// Message shown when a save targets a document that left the result set.
pub const DOCUMENT_NOT_FOUND: &str = "Document not found";

/// Which backend call failed. Controls the wording of the status error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Update,
    Preview,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{}", status_message(.operation, .status))]
    Status { operation: Operation, status: StatusCode },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend URL '{0}'")]
    InvalidUrl(String),
}

fn status_message(operation: &Operation, status: &StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or(status.as_str());
    match operation {
        Operation::Search => format!("Search failed: {reason}"),
        Operation::Update => format!("Update failed: {reason}"),
        Operation::Preview => "Failed to load preview".to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_use_operation_wording() {
        let err = ClientError::Status {
            operation: Operation::Search,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Search failed: Internal Server Error");

        let err = ClientError::Status { operation: Operation::Update, status: StatusCode::NOT_FOUND };
        assert_eq!(err.to_string(), "Update failed: Not Found");

        let err = ClientError::Status {
            operation: Operation::Preview,
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(err.to_string(), "Failed to load preview");
    }
}
