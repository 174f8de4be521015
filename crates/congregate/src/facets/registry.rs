//! Facet declarations and the per-page registry.
//!
//! A [`Facet`] names one filterable dimension of an entity type and knows how
//! to pull its value(s) out of a record. A [`FacetRegistry`] is the single
//! place a list page declares all of them, once, at setup time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::value::{Extracted, FacetValue, Selection};
use crate::error::{CongregateError, Result};
use crate::query::QueryState;
use crate::timeframe::Timeframe;

/// How a facet's extracted value is compared against a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Extracted value equals the selection.
    Exact,
    /// Selection is a case-insensitive substring of the extracted text.
    SubstringCi,
    /// Selection appears among the extracted values.
    SetMembership,
    /// Extracted date falls within the selected timeframe or window.
    DateRange,
}

type Extractor<T> = Arc<dyn Fn(&T) -> Extracted + Send + Sync>;

/// One filterable dimension over `T`.
pub struct Facet<T> {
    key: String,
    label: Option<String>,
    mode: MatchMode,
    searchable: bool,
    extract: Extractor<T>,
}

impl<T> Facet<T> {
    /// Create a facet. `extract` must be a pure function of the entity.
    pub fn new<F, R>(key: impl Into<String>, mode: MatchMode, extract: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Extracted>,
    {
        Self {
            key: key.into(),
            label: None,
            mode,
            searchable: false,
            extract: Arc::new(move |entity| extract(entity).into()),
        }
    }

    pub fn exact<F, R>(key: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Extracted>,
    {
        Self::new(key, MatchMode::Exact, extract)
    }

    pub fn substring<F, R>(key: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Extracted>,
    {
        Self::new(key, MatchMode::SubstringCi, extract)
    }

    pub fn member_of<F, R>(key: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Extracted>,
    {
        Self::new(key, MatchMode::SetMembership, extract)
    }

    pub fn date_range<F, R>(key: impl Into<String>, extract: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Extracted>,
    {
        Self::new(key, MatchMode::DateRange, extract)
    }

    /// Include this facet's text values in free-text search.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Human readable name for rendering the facet's control.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The label, falling back to the key.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn extract(&self, entity: &T) -> Extracted {
        (self.extract)(entity)
    }
}

impl<T> Clone for Facet<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            mode: self.mode,
            searchable: self.searchable,
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facet")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("mode", &self.mode)
            .field("searchable", &self.searchable)
            .finish_non_exhaustive()
    }
}

/// A soft problem in a query. Never fatal: the engine skips the offending
/// part and keeps filtering with the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIssue {
    /// The query selects on a key no facet is registered under.
    UnknownFacet(String),
    /// A date-range facet was given a value that is not a timeframe key.
    InvalidTimeframe { facet: String, value: String },
    /// A date window was selected on a facet that does not hold dates.
    ModeMismatch { facet: String, mode: MatchMode },
    /// The sort key names no registered facet.
    UnknownSortKey(String),
}

impl fmt::Display for QueryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryIssue::UnknownFacet(key) => write!(f, "unknown facet \"{}\"", key),
            QueryIssue::InvalidTimeframe { facet, value } => {
                write!(f, "facet \"{}\": unknown timeframe \"{}\"", facet, value)
            }
            QueryIssue::ModeMismatch { facet, mode } => {
                write!(f, "facet \"{}\": date window on {:?} facet", facet, mode)
            }
            QueryIssue::UnknownSortKey(key) => write!(f, "unknown sort key \"{}\"", key),
        }
    }
}

/// Registry of the facets of one entity type, in registration order.
pub struct FacetRegistry<T> {
    facets: Vec<Facet<T>>,
}

impl<T> Default for FacetRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FacetRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            facets: self.facets.clone(),
        }
    }
}

impl<T> fmt::Debug for FacetRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.facets.iter()).finish()
    }
}

impl<T> FacetRegistry<T> {
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Add a facet. Fails if its key is already taken.
    pub fn register(&mut self, facet: Facet<T>) -> Result<()> {
        if self.get(facet.key()).is_some() {
            return Err(CongregateError::DuplicateFacetKey(facet.key().to_string()));
        }
        tracing::trace!(key = facet.key(), mode = ?facet.mode(), "registered facet");
        self.facets.push(facet);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, facet: Facet<T>) -> Result<Self> {
        self.register(facet)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Facet<T>> {
        self.facets.iter().find(|f| f.key() == key)
    }

    /// All facets, in registration order.
    pub fn all(&self) -> &[Facet<T>] {
        &self.facets
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.facets.iter().map(|f| f.key())
    }

    /// Facets that take part in free-text search.
    pub fn searchable(&self) -> impl Iterator<Item = &Facet<T>> {
        self.facets.iter().filter(|f| f.is_searchable())
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Report the parts of `query` the engine will ignore.
    pub fn validate(&self, query: &QueryState) -> Vec<QueryIssue> {
        let mut issues = Vec::new();
        for (key, selection) in query.active() {
            let Some(facet) = self.get(key) else {
                issues.push(QueryIssue::UnknownFacet(key.to_string()));
                continue;
            };
            match (facet.mode(), selection) {
                (MatchMode::DateRange, Selection::Is(FacetValue::Date(_))) => {}
                (MatchMode::DateRange, Selection::Is(value)) => {
                    if timeframe_of(value).is_none() {
                        issues.push(QueryIssue::InvalidTimeframe {
                            facet: key.to_string(),
                            value: value.to_string(),
                        });
                    }
                }
                (mode, Selection::Within(_)) if mode != MatchMode::DateRange => {
                    issues.push(QueryIssue::ModeMismatch {
                        facet: key.to_string(),
                        mode,
                    });
                }
                _ => {}
            }
        }
        if let Some(sort) = query.sort() {
            if self.get(&sort.key).is_none() {
                issues.push(QueryIssue::UnknownSortKey(sort.key.clone()));
            }
        }
        issues
    }
}

/// Interpret a selected value as a timeframe key.
pub(crate) fn timeframe_of(value: &FacetValue) -> Option<Timeframe> {
    value.as_text().and_then(|s| s.parse().ok())
}
