//! # Query State
//!
//! The user's current combination of facet selections, free-text search and
//! sort order. Every transition consumes nothing and returns a new value, so a
//! page can keep the previous state around (undo, comparison, memoization)
//! and the engine never observes a half-applied update.
//!
//! Keys are not checked against any registry here. A stale key is carried
//! along and ignored at filter time; see [`crate::facets::QueryIssue`].

use serde::{Deserialize, Serialize};

use crate::facets::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// An explicit sort step, applied once after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    /// Facet selections in the order they were first set.
    #[serde(default)]
    selections: Vec<(String, Selection)>,
    #[serde(default)]
    search_text: String,
    #[serde(default)]
    sort: Option<SortSpec>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value for `key`. Setting the "all" sentinel clears the facet.
    pub fn set_facet(&self, key: impl Into<String>, selection: impl Into<Selection>) -> Self {
        let key = key.into();
        let selection = selection.into();
        if selection.is_all() {
            return self.clear_facet(&key);
        }
        let mut next = self.clone();
        match next.selections.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = selection,
            None => next.selections.push((key, selection)),
        }
        next
    }

    pub fn clear_facet(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.selections.retain(|(k, _)| k != key);
        next
    }

    pub fn set_search_text(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }

    pub fn sort_by(&self, key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            sort: Some(SortSpec {
                key: key.into(),
                direction,
            }),
            ..self.clone()
        }
    }

    pub fn clear_sort(&self) -> Self {
        Self {
            sort: None,
            ..self.clone()
        }
    }

    /// Everything unset: the "Reset Filters" button.
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// The selection for `key`; unset facets report [`Selection::All`].
    pub fn selection(&self, key: &str) -> &Selection {
        const ALL: &Selection = &Selection::All;
        self.selections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, s)| s)
            .unwrap_or(ALL)
    }

    /// Active (non-"all") selections in the order they were set.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.selections
            .iter()
            .filter(|(_, s)| !s.is_all())
            .map(|(k, s)| (k.as_str(), s))
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// True when applying this query would change nothing.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none() && self.search_text.trim().is_empty() && self.sort.is_none()
    }
}
