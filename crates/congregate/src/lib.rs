//! # Congregate Architecture
//!
//! Congregate is the **list-filtering core** of a multi-branch church
//! administration dashboard. The dashboard's pages (staff directory, event
//! templates, anniversary tracker, report catalog) all narrow an in-memory
//! list by a few dropdowns and a search box, sort it, and let the user expand
//! one row. This crate implements that once, generically, with no UI or
//! network assumptions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Layer (external)                                        │
//! │  - Renders controls and rows, turns clicks into calls       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Facade (view.rs)                                      │
//! │  - One ListView per page: store + registry + query + rows   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (facets/, query.rs, expansion.rs, selection.rs)       │
//! │  - Pure functions and immutable state transitions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Entity Store (store.rs, normalize.rs)                      │
//! │  - Decoded, normalized records from the remote API          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Explicit Inputs
//!
//! Filtering takes every input as an argument: the entities, the registry,
//! the query, and a [`FilterContext`] carrying the reference date. Nothing
//! reads a clock, a global, or captured mutable state, so the same inputs
//! always give the same visible list and every piece is testable without a UI.
//!
//! ## Error Policy
//!
//! Setup mistakes (two facets with one key) fail immediately with
//! [`CongregateError`]. Query problems (a stale facet key, a timeframe nobody
//! recognizes) never fail: the offending selection is skipped and the user
//! still sees a list. [`facets::FacetRegistry::validate`] reports them for
//! UIs that want to.
//!
//! ## Module Overview
//!
//! - [`facets`]: facet values, registry, the filter engine, option counts
//! - [`query`]: the user's selections, search text and sort
//! - [`timeframe`]: named date windows resolved against a reference date
//! - [`expansion`]: single expanded row and the collapse policy
//! - [`selection`]: grouped select-all checkboxes
//! - [`store`]: the entity collection and its JSON boundary
//! - [`normalize`]: sum types for inconsistently shaped API fields
//! - [`view`]: per-page facade
//! - [`dashboard`]: the concrete entities and their registries
//! - [`config`]: engine settings

pub mod config;
pub mod dashboard;
pub mod error;
pub mod expansion;
pub mod facets;
pub mod normalize;
pub mod query;
pub mod selection;
pub mod store;
pub mod timeframe;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use config::EngineConfig;
pub use error::{CongregateError, Result};
pub use expansion::{CollapsePolicy, ExpansionState};
pub use query::{QueryState, SortDirection, SortSpec};
pub use selection::{group_state, toggle_group, GroupState};
pub use store::EntityStore;
pub use timeframe::{DateWindow, FilterContext, Timeframe};
pub use view::ListView;
