//! Role editor permission groups.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::selection::{group_state, toggle_group, GroupState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGroup {
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl PermissionGroup {
    pub fn ids(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.id.clone()).collect()
    }

    /// The group's "Select All" checkbox was clicked.
    pub fn toggle(&self, selected: &HashSet<String>) -> HashSet<String> {
        toggle_group(selected, &self.ids())
    }

    pub fn state(&self, selected: &HashSet<String>) -> GroupState {
        group_state(selected, &self.ids())
    }
}
