//! # Entity Store
//!
//! The in-memory collection a list page filters. Records arrive from the
//! remote API as JSON; decoding them here is where loosely shaped payloads
//! become typed records (see [`crate::normalize`]), so the filter engine only
//! ever sees normalized entities.
//!
//! A store starts out *not loaded*. Filtering an unloaded store is fine and
//! yields nothing; the flag only lets a page tell "still fetching" apart from
//! "fetched, and the list is empty".

use serde::de::DeserializeOwned;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    records: Vec<T>,
    loaded: bool,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> EntityStore<T> {
    /// A store whose data has not arrived yet.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
        }
    }

    pub fn loaded(records: Vec<T>) -> Self {
        Self {
            records,
            loaded: true,
        }
    }

    /// Swap in a freshly fetched collection.
    pub fn replace(&mut self, records: Vec<T>) {
        tracing::debug!(count = records.len(), "entity store replaced");
        self.records = records;
        self.loaded = true;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|r| predicate(r))
    }
}

impl<T: DeserializeOwned> EntityStore<T> {
    /// Decode a JSON array of records.
    pub fn from_json(payload: &str) -> Result<Self> {
        let records: Vec<T> = serde_json::from_str(payload)?;
        tracing::debug!(count = records.len(), "entity store decoded");
        Ok(Self::loaded(records))
    }
}

impl<'a, T> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
