//! Staff directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::facets::{Extracted, Facet, FacetRegistry};
use crate::normalize::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    Active,
    OnLeave,
    Inactive,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::OnLeave => "on_leave",
            StaffStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub branch_id: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub status: StaffStatus,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Facets of the staff directory. Search covers position, department and roles.
pub fn registry() -> Result<FacetRegistry<StaffMember>> {
    FacetRegistry::new()
        .with(Facet::exact("branch", |s: &StaffMember| s.branch_id.clone()).labeled("Branch"))?
        .with(
            Facet::exact("department", |s: &StaffMember| s.department.clone())
                .labeled("Department")
                .searchable(),
        )?
        .with(Facet::exact("status", |s: &StaffMember| s.status.as_str()).labeled("Status"))?
        .with(
            Facet::member_of("role", |s: &StaffMember| Extracted::many(&s.roles))
                .labeled("Role")
                .searchable(),
        )?
        .with(Facet::date_range("hired", |s: &StaffMember| s.hire_date).labeled("Hired"))?
        .with(
            Facet::substring("position", |s: &StaffMember| s.position.clone())
                .labeled("Position")
                .searchable(),
        )?
        .with(Facet::substring("city", |s: &StaffMember| {
            s.address.as_ref().and_then(|a| a.city()).map(str::to_string)
        }))?
        .with(Facet::exact("name", |s: &StaffMember| s.name.clone()))
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

    fn names(result: &[&StaffMember]) -> Vec<String> {
        result.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn registry_builds() {
        let reg = registry().unwrap();
        assert_eq!(reg.len(), 8);
        let searchable: Vec<&str> = reg.searchable().map(|f| f.key()).collect();
        assert_eq!(searchable, vec!["department", "role", "position"]);
    }

    #[test]
    fn filter_by_status() {
        let staff = fixtures::staff();
        let q = QueryState::new().set_facet("status", "on_leave");
        assert_eq!(names(&apply(&staff, &registry().unwrap(), &q, &ctx())), vec!["James Wilson"]);
    }

    #[test]
    fn filter_by_role_membership() {
        let staff = fixtures::staff();
        let q = QueryState::new().set_facet("role", "Pastoral Care");
        assert_eq!(
            names(&apply(&staff, &registry().unwrap(), &q, &ctx())),
            vec!["Sarah Johnson", "Grace Kim"]
        );
    }

    #[test]
    fn filter_by_city_uses_structured_addresses_only() {
        let staff = fixtures::staff();
        let q = QueryState::new().set_facet("city", "dayton");
        assert_eq!(names(&apply(&staff, &registry().unwrap(), &q, &ctx())), vec!["Sarah Johnson"]);
    }

    #[test]
    fn recently_hired() {
        let staff = fixtures::staff();
        let q = QueryState::new().set_facet("hired", "last 30 days");
        assert_eq!(names(&apply(&staff, &registry().unwrap(), &q, &ctx())), vec!["Daniel Brown"]);
    }

    #[test]
    fn sort_by_name() {
        let staff = fixtures::staff();
        let q = QueryState::new()
            .set_facet("branch", "b3")
            .sort_by("name", SortDirection::Asc);
        assert_eq!(
            names(&apply(&staff, &registry().unwrap(), &q, &ctx())),
            vec!["Daniel Brown", "Emily Davis", "Robert Garcia"]
        );
    }
}
