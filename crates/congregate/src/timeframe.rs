//! # Timeframes
//!
//! Date-range facets are filtered by named, relative windows ("upcoming",
//! "this month", "next 30 days") rather than raw dates. A window only has
//! meaning relative to a reference date, and that date is always passed in
//! through [`FilterContext`]. Nothing in this crate reads the system clock.
//!
//! ## Recognized keys
//!
//! Keys are matched case-insensitively, and spaces or hyphens are treated as
//! underscores, so `"Next 90 Days"`, `"next-90-days"` and `"next_90_days"`
//! are the same selector.
//!
//! | Key | Window (inclusive) |
//! |-----|--------------------|
//! | `upcoming` | today .. today + `upcoming_days` |
//! | `past` | everything before today |
//! | `recent` | today - `recent_days` .. today |
//! | `today` | today |
//! | `this_week` | Monday .. Sunday of the current ISO week |
//! | `this_month` | first .. last day of the current month |
//! | `next_month` | first .. last day of the following month |
//! | `this_year` | Jan 1 .. Dec 31 of the current year |
//! | `next_N_days` | today .. today + N |
//! | `last_N_days`, `past_N_days` | today - N .. today |

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::EngineConfig;

pub const DEFAULT_UPCOMING_DAYS: u32 = 90;
pub const DEFAULT_RECENT_DAYS: u32 = 30;

/// An inclusive date window. A missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn on(day: NaiveDate) -> Self {
        Self::between(day, day)
    }

    pub fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

/// The reference point every date-range evaluation is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterContext {
    pub today: NaiveDate,
    pub upcoming_days: u32,
    pub recent_days: u32,
}

impl FilterContext {
    /// A context at `today` with the default window lengths.
    pub fn at(today: NaiveDate) -> Self {
        Self {
            today,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }

    pub fn from_config(today: NaiveDate, config: &EngineConfig) -> Self {
        Self {
            today,
            upcoming_days: config.upcoming_days,
            recent_days: config.recent_days,
        }
    }
}

/// A named relative date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    Upcoming,
    Past,
    Recent,
    Today,
    ThisWeek,
    ThisMonth,
    NextMonth,
    ThisYear,
    NextDays(u32),
    LastDays(u32),
}

/// Returned when a string is not a recognized timeframe key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown timeframe: {0}")]
pub struct UnknownTimeframe(pub String);

impl Timeframe {
    /// Resolve this timeframe to a concrete window around `ctx.today`.
    pub fn window(&self, ctx: &FilterContext) -> DateWindow {
        let today = ctx.today;
        match self {
            Timeframe::Upcoming => DateWindow::between(today, add_days(today, ctx.upcoming_days)),
            Timeframe::Past => DateWindow::until(sub_days(today, 1)),
            Timeframe::Recent => DateWindow::between(sub_days(today, ctx.recent_days), today),
            Timeframe::Today => DateWindow::on(today),
            Timeframe::ThisWeek => {
                let week = today.week(Weekday::Mon);
                DateWindow::between(week.first_day(), week.last_day())
            }
            Timeframe::ThisMonth => {
                month_window(today.year(), today.month()).unwrap_or(DateWindow::on(today))
            }
            Timeframe::NextMonth => {
                let (year, month) = if today.month() == 12 {
                    (today.year() + 1, 1)
                } else {
                    (today.year(), today.month() + 1)
                };
                month_window(year, month).unwrap_or(DateWindow::starting(today))
            }
            Timeframe::ThisYear => {
                year_window(today.year()).unwrap_or(DateWindow::on(today))
            }
            Timeframe::NextDays(n) => DateWindow::between(today, add_days(today, *n)),
            Timeframe::LastDays(n) => DateWindow::between(sub_days(today, *n), today),
        }
    }
}

fn add_days(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MAX)
}

fn sub_days(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MIN)
}

fn month_window(year: i32, month: u32) -> Option<DateWindow> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(DateWindow::between(first, next_first.pred_opt()?))
}

fn year_window(year: i32) -> Option<DateWindow> {
    Some(DateWindow::between(
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

fn normalize_key(s: &str) -> String {
    let replaced: String = s
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect();
    replaced
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

impl FromStr for Timeframe {
    type Err = UnknownTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        let parsed = match key.as_str() {
            "upcoming" => Some(Timeframe::Upcoming),
            "past" => Some(Timeframe::Past),
            "recent" => Some(Timeframe::Recent),
            "today" => Some(Timeframe::Today),
            "this_week" => Some(Timeframe::ThisWeek),
            "this_month" => Some(Timeframe::ThisMonth),
            "next_month" => Some(Timeframe::NextMonth),
            "this_year" => Some(Timeframe::ThisYear),
            other => parse_day_count(other),
        };
        parsed.ok_or_else(|| UnknownTimeframe(s.to_string()))
    }
}

fn parse_day_count(key: &str) -> Option<Timeframe> {
    let parts: Vec<&str> = key.split('_').collect();
    let [direction, count, unit] = parts.as_slice() else {
        return None;
    };
    if *unit != "days" && *unit != "day" {
        return None;
    }
    let n: u32 = count.parse().ok()?;
    match *direction {
        "next" => Some(Timeframe::NextDays(n)),
        "last" | "past" => Some(Timeframe::LastDays(n)),
        _ => None,
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Upcoming => write!(f, "upcoming"),
            Timeframe::Past => write!(f, "past"),
            Timeframe::Recent => write!(f, "recent"),
            Timeframe::Today => write!(f, "today"),
            Timeframe::ThisWeek => write!(f, "this_week"),
            Timeframe::ThisMonth => write!(f, "this_month"),
            Timeframe::NextMonth => write!(f, "next_month"),
            Timeframe::ThisYear => write!(f, "this_year"),
            Timeframe::NextDays(n) => write!(f, "next_{}_days", n),
            Timeframe::LastDays(n) => write!(f, "last_{}_days", n),
        }
    }
}

impl TryFrom<String> for Timeframe {
    type Error = UnknownTimeframe;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Timeframe> for String {
    fn from(t: Timeframe) -> Self {
        t.to_string()
    }
}
