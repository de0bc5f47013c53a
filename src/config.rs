//! Highlighting configuration for PGDL
//!
//! Chooses the start production and whether classification fallbacks are logged.

use pgdl_syntax::EntryPoint;

/// Highlighting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    /// Start production the input is parsed as
    pub entry: EntryPoint,
    /// Whether lexemes classified as `Generic` are reported through `tracing::warn!`
    pub warn_on_fallback: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            entry: EntryPoint::Program,
            warn_on_fallback: true,
        }
    }
}

impl HighlightConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start production
    pub fn with_entry(mut self, entry: EntryPoint) -> Self {
        self.entry = entry;
        self
    }

    /// Enable or disable fallback warnings
    pub fn with_fallback_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_fallback = enabled;
        self
    }
}
