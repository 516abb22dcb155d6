//! Client configuration: where the search backend lives and how long to wait on it.
//!
//! Sources, later ones winning:
//! 1. `config.toml` in [`crate::config_dir`]
//! 2. `.facetscope.toml` in the working directory
//! 3. `FACETSCOPE_URL` / `FACETSCOPE_TIMEOUT_SECS`
//!
//! Front ends apply their own flags (e.g. `--url`) on top of the result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = ".facetscope.toml";

const ENV_URL: &str = "FACETSCOPE_URL";
const ENV_TIMEOUT: &str = "FACETSCOPE_TIMEOUT_SECS";

/// Known keys in config files, for typo warnings.
const KNOWN_CONFIG_KEYS: &[&str] = &["base_url", "timeout_secs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin; endpoint paths are appended to it.
    pub base_url: String,
    /// Per-request timeout. `0` disables it.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Absolute URL of a backend endpoint such as `/api/search`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Merge overrides from a TOML file into `self`.
    ///
    /// Unknown keys trigger a warning with a typo suggestion.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let table: toml::Table = content
            .parse()
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        for key in table.keys() {
            if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                continue;
            }
            let suggestion = KNOWN_CONFIG_KEYS
                .iter()
                .min_by_key(|k| edit_distance(key, k))
                .copied()
                .unwrap_or_default();
            if edit_distance(key, suggestion) <= 3 {
                warn!(
                    key = key.as_str(),
                    suggestion,
                    "Unknown key in {} — did you mean '{suggestion}'?",
                    path.display()
                );
            } else {
                warn!(
                    key = key.as_str(),
                    "Unknown key in {} (known keys: {})",
                    path.display(),
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }

        let base_url = match table.get("base_url") {
            None => None,
            Some(url) => match url.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    return Err(ConfigError::InvalidValue { key: "base_url", value: url.to_string() })
                }
            },
        };
        let timeout_secs = match table.get("timeout_secs") {
            None => None,
            Some(timeout) => match timeout.as_integer().and_then(|t| u64::try_from(t).ok()) {
                Some(t) => Some(t),
                None => {
                    return Err(ConfigError::InvalidValue {
                        key: "timeout_secs",
                        value: timeout.to_string(),
                    })
                }
            },
        };

        // Nothing is applied unless the whole file validated.
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(t) = timeout_secs {
            self.timeout_secs = t;
        }
        Ok(())
    }

    /// Apply `FACETSCOPE_*` overrides from a variable lookup. All or nothing.
    pub fn merge_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_URL).filter(|u| !u.is_empty());
        let timeout_secs = match lookup(ENV_TIMEOUT).filter(|t| !t.is_empty()) {
            None => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue { key: "timeout_secs", value: raw.clone() })?,
            ),
        };

        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(t) = timeout_secs {
            self.timeout_secs = t;
        }
        Ok(())
    }
}

/// Config files consulted for `cwd`, lowest precedence first.
pub fn config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = crate::config_dir() {
        files.push(dir.join("config.toml"));
    }
    files.push(cwd.join(LOCAL_CONFIG_FILE));
    files
}

/// Load the client configuration for `cwd` from files and the process environment.
///
/// Missing files are skipped. A file that can't be read or parsed is skipped with
/// a warning, so a broken config never stops the client from starting.
pub fn load_client_config(cwd: &Path) -> ClientConfig {
    let mut config = ClientConfig::default();
    for path in config_files(cwd) {
        if !path.exists() {
            continue;
        }
        debug!(path = %path.display(), "Loading config");
        if let Err(e) = config.merge_file(&path) {
            warn!(error = %e, "Ignoring config file");
        }
    }
    if let Err(e) = config.merge_env(|k| std::env::var(k).ok()) {
        warn!(error = %e, "Ignoring environment override");
    }
    config
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
        assert_eq!(config.endpoint("/api/search"), "http://127.0.0.1:8000/api/search");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = ClientConfig { base_url: "https://docs.example.com/".into(), timeout_secs: 0 };
        assert_eq!(config.endpoint("/api/preview"), "https://docs.example.com/api/preview");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "base_url = \"http://search.internal:9000\"\ntimeout_secs = 5\nbase_ulr = 1\n")
            .unwrap();

        let mut config = ClientConfig::default();
        config.merge_file(&path).unwrap();
        assert_eq!(config.base_url, "http://search.internal:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn file_with_wrong_types_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

        let mut config = ClientConfig::default();
        let err = config.merge_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "timeout_secs", .. }));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn rejected_file_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "base_url = \"http://half-applied:1\"\ntimeout_secs = \"soon\"\n").unwrap();

        let mut config = ClientConfig::default();
        assert!(config.merge_file(&path).is_err());
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn rejected_env_changes_nothing() {
        let vars: HashMap<&str, &str> =
            [("FACETSCOPE_URL", "http://half-applied:1"), ("FACETSCOPE_TIMEOUT_SECS", "soon")].into();
        let mut config = ClientConfig::default();
        assert!(config.merge_env(|k| vars.get(k).map(|v| v.to_string())).is_err());
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn unparseable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "base_url = [unterminated").unwrap();

        let err = ClientConfig::default().merge_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides() {
        let vars: HashMap<&str, &str> =
            [("FACETSCOPE_URL", "http://env:1"), ("FACETSCOPE_TIMEOUT_SECS", "12")].into();
        let mut config = ClientConfig::default();
        config.merge_env(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url, "http://env:1");
        assert_eq!(config.timeout_secs, 12);

        let err = config.merge_env(|k| (k == "FACETSCOPE_TIMEOUT_SECS").then(|| "x".to_string()));
        assert!(err.is_err());
    }

    #[test]
    fn local_file_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LOCAL_CONFIG_FILE), "timeout_secs = 0\n").unwrap();
        let files = config_files(dir.path());
        assert_eq!(files.last(), Some(&dir.path().join(LOCAL_CONFIG_FILE)));

        let mut config = ClientConfig::default();
        config.merge_file(files.last().unwrap()).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("base_url", "base_url"), 0);
        assert_eq!(edit_distance("base_ulr", "base_url"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
    }
}
