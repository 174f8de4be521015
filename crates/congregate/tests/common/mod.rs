#![allow(dead_code)]

use chrono::NaiveDate;
use congregate::dashboard::{Anniversary, PermissionGroup, StaffMember};
use congregate::EntityStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn staff() -> EntityStore<StaffMember> {
    EntityStore::from_json(include_str!("../fixtures/staff.json")).unwrap()
}

pub fn anniversaries() -> EntityStore<Anniversary> {
    EntityStore::from_json(include_str!("../fixtures/anniversaries.json")).unwrap()
}

pub fn permission_groups() -> Vec<PermissionGroup> {
    serde_json::from_str(include_str!("../fixtures/permissions.json")).unwrap()
}
