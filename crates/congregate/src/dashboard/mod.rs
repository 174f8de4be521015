//! # Dashboard Entities
//!
//! The records behind each list page of the admin dashboard, as decoded from
//! the API, together with the facet registry each page filters them with.
//!
//! | Page | Entity | Facets |
//! |------|--------|--------|
//! | Staff directory | [`StaffMember`] | branch, department, status, role, hired, position, city, name |
//! | Anniversary tracker | [`Anniversary`] | type, branch, timeframe, person |
//! | Event templates | [`EventTemplate`] | category, branch, created_by, name, description |
//! | Report builder | [`ReportCategory`] | category, tag, name, description |
//! | Role editor | [`PermissionGroup`] | (grouped select-all, no facets) |

pub mod anniversary;
pub mod permissions;
pub mod report;
pub mod staff;
pub mod template;

pub use anniversary::{Anniversary, AnniversaryType};
pub use permissions::{Permission, PermissionGroup};
pub use report::ReportCategory;
pub use staff::{StaffMember, StaffStatus};
pub use template::EventTemplate;
