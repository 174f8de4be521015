//! Anniversary tracker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::facets::{Extracted, Facet, FacetRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnniversaryType {
    Marriage,
    Membership,
    Baptism,
    Ordination,
}

impl AnniversaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnniversaryType::Marriage => "marriage",
            AnniversaryType::Membership => "membership",
            AnniversaryType::Baptism => "baptism",
            AnniversaryType::Ordination => "ordination",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anniversary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AnniversaryType,
    pub names: Vec<String>,
    pub date: NaiveDate,
    pub branch_id: String,
    #[serde(default)]
    pub years: Option<u32>,
}

impl Anniversary {
    /// "John Smith & Mary Smith"
    pub fn display_names(&self) -> String {
        self.names.join(" & ")
    }
}

pub fn registry() -> Result<FacetRegistry<Anniversary>> {
    FacetRegistry::new()
        .with(Facet::exact("type", |a: &Anniversary| a.kind.as_str()).labeled("Type"))?
        .with(Facet::exact("branch", |a: &Anniversary| a.branch_id.clone()).labeled("Branch"))?
        .with(Facet::date_range("timeframe", |a: &Anniversary| a.date).labeled("Timeframe"))?
        .with(
            Facet::member_of("person", |a: &Anniversary| Extracted::many(&a.names))
                .labeled("Person")
                .searchable(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::apply;
    use crate::query::{QueryState, SortDirection};
    use crate::test_utils::fixtures;
    use crate::FilterContext;

    fn ctx() -> FilterContext {
        FilterContext::at(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
    }

    fn ids(result: &[&Anniversary]) -> Vec<String> {
        result.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn this_month() {
        let all = fixtures::anniversaries();
        let q = QueryState::new().set_facet("timeframe", "this_month");
        assert_eq!(ids(&apply(&all, &registry().unwrap(), &q, &ctx())), vec!["ann-4"]);
    }

    #[test]
    fn search_by_person() {
        let all = fixtures::anniversaries();
        let q = QueryState::new().set_search_text("rivera");
        assert_eq!(ids(&apply(&all, &registry().unwrap(), &q, &ctx())), vec!["ann-3"]);
    }

    #[test]
    fn upcoming_sorted_by_date() {
        let all = fixtures::anniversaries();
        let q = QueryState::new()
            .set_facet("timeframe", "upcoming")
            .sort_by("timeframe", SortDirection::Asc);
        assert_eq!(
            ids(&apply(&all, &registry().unwrap(), &q, &ctx())),
            vec!["ann-4", "ann-1", "ann-3"]
        );
    }

    #[test]
    fn display_names_joined() {
        let all = fixtures::anniversaries();
        assert_eq!(all[0].display_names(), "John Smith & Mary Smith");
    }
}
