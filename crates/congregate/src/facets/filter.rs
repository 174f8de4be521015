//! The filter engine.
//!
//! [`apply`] is a pure function of its inputs: the same entities, registry,
//! query and context always give the same result. It never mutates the
//! entities, and the result borrows from them, so every returned item is
//! reference-equal to an input item.
//!
//! Evaluation per entity:
//!
//! 1. Every active facet selection must match (AND across facets).
//! 2. If the search text is non-blank, at least one text value of at least
//!    one searchable facet must contain it (OR across fields).
//! 3. The survivors are stably sorted if the query names a sort facet.
//!
//! Selections on unknown keys, unrecognized timeframe keys on date-range
//! facets, and date windows on facets that hold no dates are skipped rather
//! than reported as errors.

use std::cmp::Ordering;

use super::registry::{timeframe_of, Facet, FacetRegistry, MatchMode};
use super::value::{Extracted, FacetValue, Selection};
use crate::query::{QueryState, SortDirection};
use crate::timeframe::{DateWindow, FilterContext};

/// A facet paired with its resolved selection, ready for per-entity checks.
enum Predicate<'r, T> {
    Value {
        facet: &'r Facet<T>,
        value: &'r FacetValue,
        /// Lower-cased selection text, computed once for substring mode.
        needle: Option<String>,
    },
    Window {
        facet: &'r Facet<T>,
        window: DateWindow,
    },
}

impl<T> Predicate<'_, T> {
    fn matches(&self, entity: &T) -> bool {
        match self {
            Predicate::Value {
                facet,
                value,
                needle,
            } => {
                let extracted = facet.extract(entity);
                match facet.mode() {
                    MatchMode::Exact => exact_match(&extracted, value),
                    MatchMode::SubstringCi => {
                        let needle = needle.as_deref().unwrap_or_default();
                        extracted.values().any(|v| contains_ci(v, needle))
                    }
                    MatchMode::SetMembership => extracted.values().any(|v| v == *value),
                    // Date facets given a concrete date compare by day.
                    MatchMode::DateRange => extracted.values().any(|v| v == *value),
                }
            }
            Predicate::Window { facet, window } => facet
                .extract(entity)
                .values()
                .filter_map(FacetValue::as_date)
                .any(|d| window.contains(d)),
        }
    }
}

fn exact_match(extracted: &Extracted, value: &FacetValue) -> bool {
    match extracted {
        Extracted::None => false,
        Extracted::One(v) => v == value,
        Extracted::Many(vs) => vs.iter().any(|v| v == value),
    }
}

/// `needle` must already be lower-cased.
fn contains_ci(value: &FacetValue, needle: &str) -> bool {
    match value {
        FacetValue::Text(s) => s.to_lowercase().contains(needle),
        other => other.to_string().to_lowercase().contains(needle),
    }
}

/// Resolve the query's active selections against the registry, dropping the
/// ones that cannot be evaluated.
fn predicates<'r, T>(
    registry: &'r FacetRegistry<T>,
    query: &'r QueryState,
    ctx: &FilterContext,
) -> Vec<Predicate<'r, T>> {
    let mut out = Vec::new();
    for (key, selection) in query.active() {
        let Some(facet) = registry.get(key) else {
            tracing::debug!(key, "ignoring selection on unknown facet");
            continue;
        };
        match (facet.mode(), selection) {
            (_, Selection::All) => {}
            (MatchMode::DateRange, Selection::Is(value @ FacetValue::Date(_))) => {
                out.push(Predicate::Value {
                    facet,
                    value,
                    needle: None,
                });
            }
            (MatchMode::DateRange, Selection::Is(value)) => match timeframe_of(value) {
                Some(timeframe) => out.push(Predicate::Window {
                    facet,
                    window: timeframe.window(ctx),
                }),
                None => {
                    tracing::debug!(key, %value, "ignoring unrecognized timeframe");
                }
            },
            (MatchMode::DateRange, Selection::Within(window)) => out.push(Predicate::Window {
                facet,
                window: *window,
            }),
            (mode, Selection::Within(_)) => {
                tracing::debug!(key, ?mode, "ignoring date window on non-date facet");
            }
            (mode, Selection::Is(value)) => out.push(Predicate::Value {
                facet,
                value,
                needle: (mode == MatchMode::SubstringCi)
                    .then(|| value.to_string().to_lowercase()),
            }),
        }
    }
    out
}

fn matches_search<T>(registry: &FacetRegistry<T>, needle: &str, entity: &T) -> bool {
    let mut fields = registry.searchable().peekable();
    if fields.peek().is_none() {
        return true;
    }
    fields.any(|facet| {
        facet
            .extract(entity)
            .values()
            .filter_map(FacetValue::as_text)
            .any(|text| text.to_lowercase().contains(needle))
    })
}

/// Narrow `entities` to those matching `query`.
///
/// `entities` can be a slice, a `&Vec<T>`, or a previous result of `apply`,
/// which makes re-filtering a filtered list straightforward.
pub fn apply<'a, T, I>(
    entities: I,
    registry: &FacetRegistry<T>,
    query: &QueryState,
    ctx: &FilterContext,
) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let preds = predicates(registry, query, ctx);
    let search = query.search_text().trim().to_lowercase();

    let mut result: Vec<&'a T> = entities
        .into_iter()
        .filter(|entity| preds.iter().all(|p| p.matches(entity)))
        .filter(|entity| search.is_empty() || matches_search(registry, &search, entity))
        .collect();

    if let Some(sort) = query.sort() {
        match registry.get(&sort.key) {
            Some(facet) => sort_by_facet(&mut result, facet, sort.direction),
            None => tracing::debug!(key = %sort.key, "ignoring sort on unknown facet"),
        }
    }

    result
}

/// Stable sort on the facet's first value. Entities without one go last.
fn sort_by_facet<T>(items: &mut [&T], facet: &Facet<T>, direction: SortDirection) {
    let mut keyed: Vec<(Option<FacetValue>, &T)> = items
        .iter()
        .map(|item| (facet.extract(item).first().cloned(), *item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    for (slot, (_, item)) in items.iter_mut().zip(keyed) {
        *slot = item;
    }
}
