//! Grouped "Select All" checkboxes.
//!
//! The role editor lists permissions in groups, each with a select-all box.
//! Clicking it deselects the whole group when every member is already
//! selected, and otherwise selects every member that is missing. A partially
//! selected group therefore goes to fully selected, never to empty.
//!
//! `toggle_group` undoes itself only from the two terminal states: when the
//! group was fully selected or fully unselected beforehand. From a partial
//! selection, toggling twice ends empty for that group, not where it started.

use std::collections::HashSet;
use std::hash::Hash;

/// How much of a group is currently selected, for tri-state rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    None,
    Partial,
    All,
}

pub fn group_state<Id: Eq + Hash>(selected: &HashSet<Id>, group: &[Id]) -> GroupState {
    let chosen = group.iter().filter(|id| selected.contains(*id)).count();
    match chosen {
        0 => GroupState::None,
        n if n == group.len() => GroupState::All,
        _ => GroupState::Partial,
    }
}

/// Select-all or deselect-all for `group`; ids outside the group are kept.
pub fn toggle_group<Id: Eq + Hash + Clone>(selected: &HashSet<Id>, group: &[Id]) -> HashSet<Id> {
    let mut next = selected.clone();
    if group.is_empty() {
        return next;
    }
    if group.iter().all(|id| selected.contains(id)) {
        for id in group {
            next.remove(id);
        }
    } else {
        next.extend(group.iter().cloned());
    }
    next
}
