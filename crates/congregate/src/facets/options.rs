//! Dropdown options and per-value counts for facet controls.

use std::collections::BTreeMap;

use super::filter::apply;
use super::registry::FacetRegistry;
use super::value::{FacetValue, Selection};
use crate::query::QueryState;
use crate::timeframe::FilterContext;

/// The distinct values `key` takes across `entities`, sorted.
///
/// Returns an empty list for an unknown key.
pub fn distinct_values<'a, T, I>(
    entities: I,
    registry: &FacetRegistry<T>,
    key: &str,
) -> Vec<FacetValue>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(facet) = registry.get(key) else {
        return Vec::new();
    };
    let mut values: Vec<FacetValue> = entities
        .into_iter()
        .flat_map(|e| facet.extract(e).values().cloned().collect::<Vec<_>>())
        .collect();
    values.sort();
    values.dedup();
    values
}

/// For each value of `key`, how many entities would remain if that facet were
/// set to it while every other part of `query` stays applied.
///
/// Values that would match nothing are still listed with a zero count, so a
/// control can render them disabled.
pub fn facet_counts<'a, T>(
    entities: &'a [T],
    registry: &FacetRegistry<T>,
    query: &QueryState,
    ctx: &FilterContext,
    key: &str,
) -> BTreeMap<FacetValue, usize> {
    let base = query.clear_facet(key).clear_sort();
    distinct_values(entities, registry, key)
        .into_iter()
        .map(|value| {
            let narrowed = base.set_facet(key, Selection::Is(value.clone()));
            let count = apply(entities, registry, &narrowed, ctx).len();
            (value, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{Extracted, Facet};
    use chrono::NaiveDate;

    struct Event {
        kind: &'static str,
        branches: Vec<&'static str>,
    }

    fn events() -> Vec<Event> {
        vec![
            Event {
                kind: "worship",
                branches: vec!["b1", "b2"],
            },
            Event {
                kind: "outreach",
                branches: vec!["b2"],
            },
            Event {
                kind: "worship",
                branches: vec!["b3"],
            },
            Event {
                kind: "fellowship",
                branches: vec![],
            },
        ]
    }

    fn registry() -> FacetRegistry<Event> {
        FacetRegistry::new()
            .with(Facet::exact("kind", |e: &Event| e.kind))
            .unwrap()
            .with(Facet::member_of("branch", |e: &Event| {
                Extracted::many(e.branches.iter().copied())
            }))
            .unwrap()
    }

    fn ctx() -> FilterContext {
        FilterContext::at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn distinct_values_sorted_and_deduplicated() {
        let all = events();
        let kinds = distinct_values(&all, &registry(), "kind");
        assert_eq!(
            kinds,
            vec![
                FacetValue::from("fellowship"),
                FacetValue::from("outreach"),
                FacetValue::from("worship")
            ]
        );
        let branches = distinct_values(&all, &registry(), "branch");
        assert_eq!(branches.len(), 3);
        assert!(distinct_values(&all, &registry(), "nope").is_empty());
    }

    #[test]
    fn counts_respect_other_selections() {
        let all = events();
        let query = QueryState::new().set_facet("branch", "b2").set_facet("kind", "outreach");
        let counts = facet_counts(&all, &registry(), &query, &ctx(), "kind");
        assert_eq!(counts[&FacetValue::from("worship")], 1);
        assert_eq!(counts[&FacetValue::from("outreach")], 1);
        assert_eq!(counts[&FacetValue::from("fellowship")], 0);
    }

    #[test]
    fn counts_without_query() {
        let all = events();
        let counts = facet_counts(&all, &registry(), &QueryState::new(), &ctx(), "branch");
        assert_eq!(counts[&FacetValue::from("b2")], 2);
        assert_eq!(counts[&FacetValue::from("b1")], 1);
    }
}
