//! Suggestion lookup configuration.

use thiserror::Error;

/// Queries shorter than this (in characters) get no suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Errors reported by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A result cap of zero would never show anything.
    #[error("max_suggestions must be at least 1")]
    ZeroMaxSuggestions,
    /// A zero minimum would offer the whole table for an empty field.
    #[error("min_query_len must be at least 1")]
    ZeroMinQueryLen,
}

/// Tuning knobs for a suggestion source.
///
/// ```rust
/// use location_autocomplete::config::Config;
///
/// let config = Config::default().with_deduplicate(true);
/// assert_eq!(config.max_suggestions, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum query length, in characters, before lookups run.
    pub min_query_len: usize,
    /// Result cap.
    pub max_suggestions: usize,
    /// Drop repeated entries from a result set. Off by default, so repeated
    /// table entries show up as repeated suggestions.
    pub deduplicate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            max_suggestions: MAX_SUGGESTIONS,
            deduplicate: false,
        }
    }
}

impl Config {
    /// Sets the minimum query length.
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    /// Sets the result cap.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Enables or disables deduplication.
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Checks that the configuration can produce suggestions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::ZeroMaxSuggestions);
        }
        if self.min_query_len == 0 {
            return Err(ConfigError::ZeroMinQueryLen);
        }
        Ok(())
    }
}
