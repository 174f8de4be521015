//! # Row Expansion
//!
//! List pages let the user click a row to expand its detail panel. At most one
//! row is expanded at a time: expanding another row collapses the previous
//! one, and clicking the expanded row again collapses it.
//!
//! Expansion is independent of filtering. When a filter change hides the
//! expanded row, what happens is a [`CollapsePolicy`]:
//!
//! - `Retain` (default): the id stays expanded. The row reappears expanded if
//!   the filter is relaxed again; in the meantime the view renders no detail
//!   for it (see [`ExpansionState::visible_expanded`]).
//! - `CollapseHidden`: the id is cleared as soon as it leaves the visible set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollapsePolicy {
    #[default]
    Retain,
    CollapseHidden,
}

/// Which single row, if any, is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState<Id> {
    expanded: Option<Id>,
}

impl<Id> Default for ExpansionState<Id> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<Id: Clone + PartialEq> ExpansionState<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `id`, or collapse it if it is the one already expanded.
    pub fn toggle(&self, id: &Id) -> Self {
        if self.is_expanded(id) {
            Self { expanded: None }
        } else {
            Self {
                expanded: Some(id.clone()),
            }
        }
    }

    pub fn collapse(&self) -> Self {
        Self { expanded: None }
    }

    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&Id> {
        self.expanded.as_ref()
    }

    /// The expanded id, but only if it is among `visible`.
    pub fn visible_expanded<'v, I>(&self, visible: I) -> Option<&Id>
    where
        Id: 'v,
        I: IntoIterator<Item = &'v Id>,
    {
        let id = self.expanded.as_ref()?;
        visible.into_iter().any(|v| v == id).then_some(id)
    }

    /// Apply `policy` after the visible set changed.
    pub fn reconcile<'v, I>(&self, visible: I, policy: CollapsePolicy) -> Self
    where
        Id: 'v,
        I: IntoIterator<Item = &'v Id>,
    {
        match policy {
            CollapsePolicy::Retain => self.clone(),
            CollapsePolicy::CollapseHidden => {
                if self.visible_expanded(visible).is_some() {
                    self.clone()
                } else {
                    if self.expanded.is_some() {
                        tracing::debug!("collapsing row hidden by filter");
                    }
                    self.collapse()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let s0 = ExpansionState::<String>::new();
        let s1 = s0.toggle(&"staff-1".to_string());
        assert!(s1.is_expanded(&"staff-1".to_string()));
        let s2 = s1.toggle(&"staff-1".to_string());
        assert_eq!(s2.expanded(), None);
        assert_eq!(s0.expanded(), None);
    }

    #[test]
    fn toggling_another_row_replaces() {
        let s = ExpansionState::new().toggle(&1).toggle(&2);
        assert!(!s.is_expanded(&1));
        assert!(s.is_expanded(&2));
    }

    #[test]
    fn collapse_resets() {
        let s = ExpansionState::new().toggle(&7);
        assert_eq!(s.collapse(), ExpansionState::new());
    }

    #[test]
    fn retain_keeps_hidden_row() {
        let s = ExpansionState::new().toggle(&"t-3".to_string());
        let visible = ids(&["t-1", "t-2"]);
        let r = s.reconcile(&visible, CollapsePolicy::Retain);
        assert!(r.is_expanded(&"t-3".to_string()));
        assert_eq!(r.visible_expanded(&visible), None);

        let visible = ids(&["t-1", "t-3"]);
        assert_eq!(r.visible_expanded(&visible), Some(&"t-3".to_string()));
    }

    #[test]
    fn collapse_hidden_clears_hidden_row() {
        let s = ExpansionState::new().toggle(&"t-3".to_string());
        let r = s.reconcile(&ids(&["t-1"]), CollapsePolicy::CollapseHidden);
        assert_eq!(r.expanded(), None);

        let kept = s.reconcile(&ids(&["t-3"]), CollapsePolicy::CollapseHidden);
        assert!(kept.is_expanded(&"t-3".to_string()));
    }
}
