//! Filter state owned by the store screen.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Quiet period between the last keystroke and filter recomputation.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// The current free-text query and active-tag selection.
///
/// Updates are functional: each `with_*` method consumes the state and
/// returns the next one, so the owning screen keeps it in a single slot
/// and the engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    query: String,
    active_tags: HashSet<String>,
}

impl FilterState {
    /// Empty state: no query, no active tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query, normalized to lower-cased, trimmed form so the
    /// engine never re-normalizes per pass.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_lowercase();
        self
    }

    /// Toggle a tag: added if absent, removed if present. Tags compose
    /// as logical OR; there is no mutual exclusivity.
    pub fn with_tag_toggled(mut self, tag: &str) -> Self {
        if !self.active_tags.remove(tag) {
            self.active_tags.insert(tag.to_string());
        }
        self
    }

    /// Deselect every tag (the "All Books" control).
    pub fn with_tags_cleared(mut self) -> Self {
        self.active_tags.clear();
        self
    }

    /// Reset query and tags.
    pub fn cleared(self) -> Self {
        Self::default()
    }

    /// The normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active-tag selection.
    pub fn active_tags(&self) -> &HashSet<String> {
        &self.active_tags
    }

    /// Check whether a tag is currently active.
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    /// Check whether any tag is active.
    pub fn has_active_tags(&self) -> bool {
        !self.active_tags.is_empty()
    }

    /// Check whether the state filters nothing.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.active_tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_normalization() {
        let state = FilterState::new().with_query("  FireWall ");
        assert_eq!(state.query(), "firewall");
    }

    #[test]
    fn test_toggle_is_symmetric_difference() {
        let state = FilterState::new().with_tag_toggled("hacking");
        assert!(state.is_tag_active("hacking"));

        let state = state.with_tag_toggled("hacking");
        assert!(!state.is_tag_active("hacking"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_prior_set() {
        let prior = FilterState::new()
            .with_tag_toggled("hacking")
            .with_tag_toggled("forensics");
        let toggled = prior.clone().with_tag_toggled("true-crime").with_tag_toggled("true-crime");
        assert_eq!(toggled, prior);
    }

    #[test]
    fn test_tags_compose_independently() {
        let state = FilterState::new()
            .with_tag_toggled("hacking")
            .with_tag_toggled("forensics");
        assert!(state.is_tag_active("hacking"));
        assert!(state.is_tag_active("forensics"));
        assert_eq!(state.active_tags().len(), 2);
    }

    #[test]
    fn test_clear_tags_keeps_query() {
        let state = FilterState::new()
            .with_query("fire")
            .with_tag_toggled("hacking")
            .with_tags_cleared();
        assert!(!state.has_active_tags());
        assert_eq!(state.query(), "fire");
    }

    #[test]
    fn test_cleared_resets_everything() {
        let state = FilterState::new()
            .with_query("fire")
            .with_tag_toggled("hacking")
            .cleared();
        assert!(state.is_empty());
    }
}
