//! # List View Facade
//!
//! A thin facade bundling everything one list page owns: the entity store,
//! the facet registry, the current query, the expansion state, and the
//! settings that come from [`EngineConfig`]. It exists so a UI layer drives a
//! page through a handful of calls instead of re-wiring the pieces itself.
//!
//! ## What the facade does NOT do
//!
//! - **Filtering logic**: that is [`crate::facets::apply`]; `visible()` calls it.
//! - **Caching**: results are recomputed on every call. The datasets are tens
//!   to low hundreds of records, and recomputing keeps the visible list
//!   consistent with the latest query and store by construction.
//! - **Rendering**: it returns data, never strings.
//!
//! Every transition that can change the visible set (a new query, a new load)
//! re-applies the configured [`CollapsePolicy`] to the expansion state, and so
//! does `toggle`: under `CollapseHidden` a row that is not visible cannot be
//! expanded.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::expansion::{CollapsePolicy, ExpansionState};
use crate::facets::{apply, facet_counts, FacetRegistry, FacetValue, QueryIssue, Selection};
use crate::query::{QueryState, SortDirection};
use crate::store::EntityStore;
use crate::timeframe::FilterContext;
use std::collections::BTreeMap;

/// One list page: store + registry + query + expansion.
pub struct ListView<T, Id> {
    store: EntityStore<T>,
    registry: FacetRegistry<T>,
    query: QueryState,
    expansion: ExpansionState<Id>,
    id_of: fn(&T) -> Id,
    ctx: FilterContext,
    policy: CollapsePolicy,
}

impl<T, Id: Clone + PartialEq> ListView<T, Id> {
    /// A view over an unloaded store, using the default configuration.
    pub fn new(registry: FacetRegistry<T>, id_of: fn(&T) -> Id, today: NaiveDate) -> Self {
        Self::with_config(registry, id_of, today, &EngineConfig::default())
    }

    pub fn with_config(
        registry: FacetRegistry<T>,
        id_of: fn(&T) -> Id,
        today: NaiveDate,
        config: &EngineConfig,
    ) -> Self {
        Self {
            store: EntityStore::empty(),
            registry,
            query: QueryState::new(),
            expansion: ExpansionState::new(),
            id_of,
            ctx: FilterContext::from_config(today, config),
            policy: config.collapse_policy,
        }
    }

    /// Replace the store's contents with freshly fetched records.
    pub fn load(&mut self, records: Vec<T>) {
        self.store.replace(records);
        self.reconcile();
    }

    /// Move the reference date, e.g. when a page stays open past midnight.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.ctx.today = today;
        self.reconcile();
    }

    pub fn set_facet(&mut self, key: &str, selection: impl Into<Selection>) {
        self.query = self.query.set_facet(key, selection);
        self.reconcile();
    }

    pub fn clear_facet(&mut self, key: &str) {
        self.query = self.query.clear_facet(key);
        self.reconcile();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query = self.query.set_search_text(text);
        self.reconcile();
    }

    pub fn sort_by(&mut self, key: &str, direction: SortDirection) {
        self.query = self.query.sort_by(key, direction);
    }

    /// Reset every filter. The expanded row survives, since clearing filters
    /// only ever widens the visible set.
    pub fn reset(&mut self) {
        self.query = self.query.reset();
        self.reconcile();
    }

    pub fn toggle(&mut self, id: &Id) {
        self.expansion = self.expansion.toggle(id);
        self.reconcile();
    }

    pub fn collapse(&mut self) {
        self.expansion = self.expansion.collapse();
    }

    /// The filtered, ordered records for the current query.
    pub fn visible(&self) -> Vec<&T> {
        apply(self.store.records(), &self.registry, &self.query, &self.ctx)
    }

    /// The expanded id, if its row is currently visible.
    pub fn visible_expanded(&self) -> Option<&Id> {
        let ids = self.visible_ids();
        self.expansion.visible_expanded(&ids)
    }

    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Per-value counts for the `key` dropdown under the current query.
    pub fn counts(&self, key: &str) -> BTreeMap<FacetValue, usize> {
        facet_counts(self.store.records(), &self.registry, &self.query, &self.ctx, key)
    }

    /// Parts of the current query that are being ignored.
    pub fn issues(&self) -> Vec<QueryIssue> {
        self.registry.validate(&self.query)
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn registry(&self) -> &FacetRegistry<T> {
        &self.registry
    }

    pub fn store(&self) -> &EntityStore<T> {
        &self.store
    }

    fn visible_ids(&self) -> Vec<Id> {
        self.visible().into_iter().map(self.id_of).collect()
    }

    fn reconcile(&mut self) {
        if self.policy == CollapsePolicy::Retain {
            return;
        }
        let ids = self.visible_ids();
        self.expansion = self.expansion.reconcile(&ids, self.policy);
    }
}
