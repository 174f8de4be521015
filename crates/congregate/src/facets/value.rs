//! Facet value types.
//!
//! This module defines the runtime representation of the values a facet
//! extracts from an entity, and of the selections a user makes against them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timeframe::DateWindow;

/// A comparable scalar pulled out of an entity.
///
/// Values of different variants never compare equal. Ordering is by variant
/// first, then by value, which gives the sort step a total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FacetValue {
    Text(String),
    Number(i64),
    Flag(bool),
    Date(NaiveDate),
}

impl FacetValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FacetValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FacetValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Text(s) => write!(f, "{}", s),
            FacetValue::Number(n) => write!(f, "{}", n),
            FacetValue::Flag(b) => write!(f, "{}", b),
            FacetValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(s: &str) -> Self {
        FacetValue::Text(s.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(s: String) -> Self {
        FacetValue::Text(s)
    }
}

impl From<&String> for FacetValue {
    fn from(s: &String) -> Self {
        FacetValue::Text(s.clone())
    }
}

impl From<i64> for FacetValue {
    fn from(n: i64) -> Self {
        FacetValue::Number(n)
    }
}

impl From<bool> for FacetValue {
    fn from(b: bool) -> Self {
        FacetValue::Flag(b)
    }
}

impl From<NaiveDate> for FacetValue {
    fn from(d: NaiveDate) -> Self {
        FacetValue::Date(d)
    }
}

/// What a facet extractor yields for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// The entity has no value for this facet.
    None,
    One(FacetValue),
    Many(Vec<FacetValue>),
}

impl Extracted {
    /// Build a multi-valued extraction from anything convertible to values.
    pub fn many<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FacetValue>,
    {
        Extracted::Many(values.into_iter().map(Into::into).collect())
    }

    /// Iterate the extracted values; `One` yields a single item.
    pub fn values(&self) -> std::slice::Iter<'_, FacetValue> {
        match self {
            Extracted::None => <&[FacetValue]>::default().iter(),
            Extracted::One(v) => std::slice::from_ref(v).iter(),
            Extracted::Many(vs) => vs.iter(),
        }
    }

    /// The first value, used as the sort key.
    pub fn first(&self) -> Option<&FacetValue> {
        self.values().next()
    }

    pub fn is_none(&self) -> bool {
        self.values().len() == 0
    }
}

impl From<FacetValue> for Extracted {
    fn from(v: FacetValue) -> Self {
        Extracted::One(v)
    }
}

macro_rules! extracted_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Extracted {
                fn from(v: $ty) -> Self {
                    Extracted::One(v.into())
                }
            }

            impl From<Option<$ty>> for Extracted {
                fn from(v: Option<$ty>) -> Self {
                    match v {
                        Some(v) => Extracted::One(v.into()),
                        None => Extracted::None,
                    }
                }
            }
        )*
    };
}

extracted_from!(&str, String, &String, i64, bool, NaiveDate);

/// A user's selection for one facet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// The "all" sentinel: do not filter on this facet.
    #[default]
    All,
    /// A concrete value. For date-range facets a text value is a timeframe key.
    Is(FacetValue),
    /// An explicit inclusive date window.
    Within(DateWindow),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Is(FacetValue::Text(s.to_string()))
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        Selection::from(s.as_str())
    }
}

impl From<FacetValue> for Selection {
    fn from(v: FacetValue) -> Self {
        Selection::Is(v)
    }
}

impl From<DateWindow> for Selection {
    fn from(w: DateWindow) -> Self {
        Selection::Within(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_from_strings() {
        assert_eq!(Selection::from("all"), Selection::All);
        assert_eq!(Selection::from("ALL"), Selection::All);
        assert_eq!(Selection::from(""), Selection::All);
        assert_eq!(
            Selection::from("b2"),
            Selection::Is(FacetValue::Text("b2".into()))
        );
    }

    #[test]
    fn different_variants_never_equal() {
        assert_ne!(FacetValue::Text("1".into()), FacetValue::Number(1));
        assert_ne!(FacetValue::Text("true".into()), FacetValue::Flag(true));
    }

    #[test]
    fn extracted_values_iteration() {
        assert_eq!(Extracted::None.values().count(), 0);
        assert!(Extracted::None.is_none());
        assert_eq!(Extracted::from("a").values().count(), 1);
        let many = Extracted::many(["a", "b", "c"]);
        assert_eq!(many.values().count(), 3);
        assert_eq!(many.first(), Some(&FacetValue::Text("a".into())));
        assert!(Extracted::Many(vec![]).is_none());
    }

    #[test]
    fn extracted_from_option() {
        assert_eq!(Extracted::from(None::<String>), Extracted::None);
        assert_eq!(
            Extracted::from(Some(3_i64)),
            Extracted::One(FacetValue::Number(3))
        );
    }

    #[test]
    fn display_formats_dates_iso() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 18).unwrap();
        assert_eq!(FacetValue::Date(d).to_string(), "2024-05-18");
    }
}
