//! Report builder catalog.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::facets::{Extracted, Facet, FacetRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn registry() -> Result<FacetRegistry<ReportCategory>> {
    FacetRegistry::new()
        .with(Facet::exact("category", |r: &ReportCategory| r.category.clone()))?
        .with(
            Facet::member_of("tag", |r: &ReportCategory| Extracted::many(&r.tags)).searchable(),
        )?
        .with(Facet::exact("name", |r: &ReportCategory| r.name.clone()).searchable())?
        .with(
            Facet::substring("description", |r: &ReportCategory| r.description.clone())
                .searchable(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{apply, distinct_values, FacetValue};
    use crate::query::QueryState;
    use crate::test_utils::fixtures;
    use crate::FilterContext;
    use chrono::NaiveDate;

    fn ctx() -> FilterContext {
        FilterContext::at(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
    }

    #[test]
    fn category_options() {
        let all = fixtures::reports();
        let options = distinct_values(&all, &registry().unwrap(), "category");
        assert_eq!(
            options,
            vec![
                FacetValue::from("attendance"),
                FacetValue::from("financial"),
                FacetValue::from("membership")
            ]
        );
    }

    #[test]
    fn search_hits_tags() {
        let all = fixtures::reports();
        let q = QueryState::new().set_search_text("monthly");
        let ids: Vec<&str> = apply(&all, &registry().unwrap(), &q, &ctx())
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["rep-1", "rep-3"]);
    }
}
