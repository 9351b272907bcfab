//! Suggestion lookup.
//!
//! A [`SuggestionSource`] turns the current query into an ordered, bounded
//! list of candidates. Lookups are pure and cheap, so the widget runs one on
//! every keystroke.
//!
//! ```rust
//! use location_autocomplete::suggest::suggest;
//!
//! let cities = suggest("Pu");
//! assert_eq!(cities.first().map(String::as_str), Some("Pune"));
//! assert!(suggest("P").is_empty());
//! ```

use crate::config::{Config, ConfigError};
use crate::locations::INDIAN_CITIES;

/// Produces suggestions for a query.
pub trait SuggestionSource {
    /// Returns candidates for `query`, best first.
    fn suggest(&self, query: &str) -> Vec<String>;
}

impl<F> SuggestionSource for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn suggest(&self, query: &str) -> Vec<String> {
        self(query)
    }
}

/// Case-insensitive prefix lookup over a static table.
///
/// Matches keep table order; there is no ranking. The result is cut to
/// [`Config::max_suggestions`] entries.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    table: &'static [&'static str],
    config: Config,
}

impl Default for StaticSource {
    fn default() -> Self {
        Self {
            table: INDIAN_CITIES,
            config: Config::default(),
        }
    }
}

impl StaticSource {
    /// Creates a source over the built-in city table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source over the built-in table with a custom configuration.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table: INDIAN_CITIES,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The backing table.
    pub fn table(&self) -> &'static [&'static str] {
        self.table
    }
}

impl SuggestionSource for StaticSource {
    fn suggest(&self, query: &str) -> Vec<String> {
        if query.chars().count() < self.config.min_query_len {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut out: Vec<String> = Vec::with_capacity(self.config.max_suggestions);
        for entry in self.table {
            if out.len() >= self.config.max_suggestions {
                break;
            }
            if !entry.to_lowercase().starts_with(&needle) {
                continue;
            }
            if self.config.deduplicate && out.iter().any(|seen| seen == entry) {
                continue;
            }
            out.push((*entry).to_string());
        }

        tracing::trace!(query, matches = out.len(), "suggestion lookup");
        out
    }
}

/// Looks `query` up in the built-in city table with default settings.
pub fn suggest(query: &str) -> Vec<String> {
    StaticSource::default().suggest(query)
}
