//! Fixture data for tests: the same records the dashboard demo pages show.

pub mod fixtures {
    use crate::dashboard::{
        Anniversary, EventTemplate, PermissionGroup, ReportCategory, StaffMember,
    };

    pub fn staff() -> Vec<StaffMember> {
        serde_json::from_str(include_str!("../tests/fixtures/staff.json"))
            .expect("staff fixture should parse")
    }

    pub fn anniversaries() -> Vec<Anniversary> {
        serde_json::from_str(include_str!("../tests/fixtures/anniversaries.json"))
            .expect("anniversary fixture should parse")
    }

    pub fn templates() -> Vec<EventTemplate> {
        serde_json::from_str(include_str!("../tests/fixtures/templates.json"))
            .expect("template fixture should parse")
    }

    pub fn reports() -> Vec<ReportCategory> {
        serde_json::from_str(include_str!("../tests/fixtures/reports.json"))
            .expect("report fixture should parse")
    }

    pub fn permission_groups() -> Vec<PermissionGroup> {
        serde_json::from_str(include_str!("../tests/fixtures/permissions.json"))
            .expect("permission fixture should parse")
    }
}
