//! Property-based tests for the filter engine and the row/group state helpers.
//!
//! - Subset: every result is one of the inputs, in input order
//! - AND composition: two facets together give the intersection of each alone
//! - Identity: an empty query keeps everything
//! - Idempotence: filtering a result again changes nothing
//! - Expansion exclusivity and group toggle round trips

use std::collections::HashSet;

use chrono::NaiveDate;
use congregate::facets::{apply, Extracted, Facet, FacetRegistry};
use congregate::{toggle_group, ExpansionState, FilterContext, QueryState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Record {
    branch: String,
    tags: Vec<String>,
    title: String,
}

fn registry() -> FacetRegistry<Record> {
    FacetRegistry::new()
        .with(Facet::exact("branch", |r: &Record| r.branch.clone()))
        .unwrap()
        .with(Facet::member_of("tag", |r: &Record| Extracted::many(&r.tags)).searchable())
        .unwrap()
        .with(Facet::substring("title", |r: &Record| r.title.clone()).searchable())
        .unwrap()
}

fn ctx() -> FilterContext {
    FilterContext::at(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
}

fn record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["b1", "b2", "b3", "b4"]),
        prop::collection::vec(
            prop::sample::select(vec!["choir", "youth", "ushers", "media"]),
            0..3,
        ),
        "[a-zA-Z ]{0,12}",
    )
        .prop_map(|(branch, tags, title)| Record {
            branch: branch.to_string(),
            tags: tags.into_iter().map(String::from).collect(),
            title,
        })
}

fn query() -> impl Strategy<Value = QueryState> {
    (
        prop::option::of(prop::sample::select(vec!["b1", "b2", "b3", "b4", "all"])),
        prop::option::of(prop::sample::select(vec!["choir", "youth", "ushers", "media"])),
        prop::option::of("[a-zA-Z]{0,3}"),
        prop::option::of("[a-z]{1,2}"),
    )
        .prop_map(|(branch, tag, title, search)| {
            let mut q = QueryState::new();
            if let Some(b) = branch {
                q = q.set_facet("branch", b);
            }
            if let Some(t) = tag {
                q = q.set_facet("tag", t);
            }
            if let Some(t) = title {
                q = q.set_facet("title", t);
            }
            if let Some(s) = search {
                q = q.set_search_text(s);
            }
            q
        })
}

fn addrs<T>(items: &[&T]) -> Vec<*const T> {
    items.iter().map(|r| *r as *const T).collect()
}

proptest! {
    #[test]
    fn result_is_an_ordered_subset(
        records in prop::collection::vec(record(), 0..20),
        q in query()
    ) {
        let reg = registry();
        let result = apply(&records, &reg, &q, &ctx());
        let input: Vec<*const Record> = records.iter().map(|r| r as *const Record).collect();

        let mut cursor = 0;
        for ptr in addrs(&result) {
            let pos = input[cursor..].iter().position(|p| *p == ptr);
            prop_assert!(pos.is_some());
            cursor += pos.unwrap() + 1;
        }
    }

    #[test]
    fn facets_compose_by_intersection(
        records in prop::collection::vec(record(), 0..20),
        branch in prop::sample::select(vec!["b1", "b2", "b3", "b4"]),
        tag in prop::sample::select(vec!["choir", "youth", "ushers", "media"]),
    ) {
        let reg = registry();
        let both = QueryState::new().set_facet("branch", branch).set_facet("tag", tag);
        let only_branch = QueryState::new().set_facet("branch", branch);
        let only_tag = QueryState::new().set_facet("tag", tag);

        let combined = addrs(&apply(&records, &reg, &both, &ctx()));
        let a: HashSet<_> = addrs(&apply(&records, &reg, &only_branch, &ctx()))
            .into_iter()
            .collect();
        let b: HashSet<_> = addrs(&apply(&records, &reg, &only_tag, &ctx()))
            .into_iter()
            .collect();
        let expected: Vec<_> = records
            .iter()
            .map(|r| r as *const Record)
            .filter(|p| a.contains(p) && b.contains(p))
            .collect();
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn empty_query_is_identity(records in prop::collection::vec(record(), 0..20)) {
        let result = apply(&records, &registry(), &QueryState::new(), &ctx());
        let input: Vec<&Record> = records.iter().collect();
        prop_assert_eq!(addrs(&result), addrs(&input));
    }

    #[test]
    fn filtering_is_idempotent(records in prop::collection::vec(record(), 0..20), q in query()) {
        let reg = registry();
        let once = apply(&records, &reg, &q, &ctx());
        let twice = apply(once.iter().copied(), &reg, &q, &ctx());
        prop_assert_eq!(addrs(&once), addrs(&twice));
    }

    #[test]
    fn at_most_one_row_expanded(toggles in prop::collection::vec(0u8..6, 0..30)) {
        let mut state = ExpansionState::new();
        for id in &toggles {
            state = state.toggle(id);
        }
        let expanded = (0u8..6).filter(|id| state.is_expanded(id)).count();
        prop_assert!(expanded <= 1);
    }

    #[test]
    fn group_toggle_round_trips_from_terminal_states(
        outside in prop::collection::hash_set(10u32..20, 0..5),
        full in any::<bool>(),
    ) {
        let group: Vec<u32> = (0..5).collect();
        let mut start = outside.clone();
        if full {
            start.extend(group.iter().copied());
        }
        let twice = toggle_group(&toggle_group(&start, &group), &group);
        prop_assert_eq!(twice, start);
    }
}
