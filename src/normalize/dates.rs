//! English date phrases to `DD.MM.YYYY`.
//!
//! Two surface forms are recognized, with capitalized month names only:
//! - `24 December 2024`
//! - `December 24, 2024` (comma optional)
//!
//! Each match is reconstructed from its captured groups joined by single
//! spaces and every occurrence of that phrase is substituted. A phrase written
//! with other internal spacing does not equal its reconstruction and stays as
//! it is. Calendar validity is not checked.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(\d{{1,2}})\s+({})\s+(\d{{4}})\b",
        MONTHS.join("|")
    ))
    .unwrap()
});

static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b({})\s+(\d{{1,2}})(,?)\s+(\d{{4}})\b",
        MONTHS.join("|")
    ))
    .unwrap()
});

/// A recognized date phrase and its numeric parts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DateMatch {
    /// Phrase as reconstructed from the captured groups.
    phrase: String,
    day: u32,
    month: u32,
    year: u32,
}

impl DateMatch {
    fn from_day_month_year(caps: &Captures) -> Option<Self> {
        let day = caps.get(1)?.as_str();
        let month_name = caps.get(2)?.as_str();
        let year = caps.get(3)?.as_str();
        Some(Self {
            phrase: format!("{} {} {}", day, month_name, year),
            day: day.parse().ok()?,
            month: month_index(month_name)?,
            year: year.parse().ok()?,
        })
    }

    fn from_month_day_year(caps: &Captures) -> Option<Self> {
        let month_name = caps.get(1)?.as_str();
        let day = caps.get(2)?.as_str();
        let comma = caps.get(3).map_or("", |m| m.as_str());
        let year = caps.get(4)?.as_str();
        Some(Self {
            phrase: format!("{} {}{} {}", month_name, day, comma, year),
            day: day.parse().ok()?,
            month: month_index(month_name)?,
            year: year.parse().ok()?,
        })
    }

    fn numeric(&self) -> String {
        format!("{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

/// 1-based index of a month name in the fixed table.
fn month_index(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}

fn replace_matches(
    text: String,
    pattern: &Regex,
    build: fn(&Captures) -> Option<DateMatch>,
) -> String {
    let mut matches: Vec<DateMatch> = Vec::new();
    for date in pattern.captures_iter(&text).filter_map(|c| build(&c)) {
        if !matches.iter().any(|seen| seen.phrase == date.phrase) {
            matches.push(date);
        }
    }

    matches.iter().fold(text, |acc, date| {
        if !acc.contains(&date.phrase) {
            tracing::debug!("Date phrase '{}' not found verbatim, left as is", date.phrase);
        }
        acc.replace(&date.phrase, &date.numeric())
    })
}

/// Rewrite recognized English dates in `text` to `DD.MM.YYYY`.
pub fn reformat_dates(text: &str) -> String {
    let text = replace_matches(text.to_string(), &DAY_MONTH_YEAR, DateMatch::from_day_month_year);
    replace_matches(text, &MONTH_DAY_YEAR, DateMatch::from_month_day_year)
}
