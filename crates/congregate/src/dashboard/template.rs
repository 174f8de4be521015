//! Event template browser.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::facets::{Extracted, Facet, FacetRegistry};
use crate::normalize::Author;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Branches the template can be scheduled at.
    #[serde(default)]
    pub branch_ids: Vec<String>,
    pub created_by: Author,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

pub fn registry() -> Result<FacetRegistry<EventTemplate>> {
    FacetRegistry::new()
        .with(Facet::exact("category", |t: &EventTemplate| t.category.clone()).labeled("Category"))?
        .with(
            Facet::member_of("branch", |t: &EventTemplate| Extracted::many(&t.branch_ids))
                .labeled("Branch"),
        )?
        .with(
            Facet::substring("created_by", |t: &EventTemplate| {
                t.created_by.display_name().to_string()
            })
            .labeled("Created by"),
        )?
        .with(Facet::exact("name", |t: &EventTemplate| t.name.clone()).searchable())?
        .with(
            Facet::substring("description", |t: &EventTemplate| t.description.clone())
                .searchable(),
        )
}
