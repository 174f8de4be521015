//! # Facet System
//!
//! Every list page in the dashboard (staff directory, event templates,
//! anniversaries, report catalog) filters the same way: a few dropdowns, a
//! search box, maybe a sort. Instead of an inline filter chain per page, a
//! page declares its filterable dimensions once and hands them to one engine:
//!
//! - **Values**: what a facet extracts from an entity ([`FacetValue`], [`Extracted`])
//!   and what the user selected ([`Selection`])
//! - **Registry**: the declared facets of an entity type ([`FacetRegistry`])
//! - **Filtering**: the pure [`apply`] function
//! - **Options**: dropdown values and per-value counts
//!
//! ## Match Modes
//!
//! | Mode | Keeps an entity when |
//! |------|----------------------|
//! | `Exact` | the extracted value equals the selection |
//! | `SubstringCi` | the selection is a case-insensitive substring of the extracted text |
//! | `SetMembership` | the selection is one of the extracted values |
//! | `DateRange` | an extracted date lies in the selected timeframe |
//!
//! ## Usage
//!
//! ```
//! use congregate::facets::{apply, Extracted, Facet, FacetRegistry};
//! use congregate::{FilterContext, QueryState};
//! use chrono::NaiveDate;
//!
//! struct Staff { name: String, branch: String, roles: Vec<String> }
//!
//! let registry = FacetRegistry::new()
//!     .with(Facet::exact("branch", |s: &Staff| s.branch.clone()))?
//!     .with(Facet::member_of("role", |s: &Staff| Extracted::many(&s.roles)).searchable())?;
//!
//! let staff = vec![
//!     Staff { name: "Ada".into(), branch: "b1".into(), roles: vec!["Worship".into()] },
//!     Staff { name: "Ben".into(), branch: "b2".into(), roles: vec!["Youth".into()] },
//! ];
//!
//! let query = QueryState::new().set_facet("branch", "b2");
//! let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! let visible = apply(&staff, &registry, &query, &FilterContext::at(today));
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Ben");
//! # Ok::<(), congregate::CongregateError>(())
//! ```

mod filter;
mod options;
mod registry;
mod value;

pub use filter::apply;
pub use options::{distinct_values, facet_counts};
pub use registry::{Facet, FacetRegistry, MatchMode, QueryIssue};
pub use value::{Extracted, FacetValue, Selection};
