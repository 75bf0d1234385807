//! Date-range detection and resolution for résumé timelines.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;

/// Month abbreviation followed by a four-digit year, e.g. `Apr 2023`.
static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+([0-9]{4})")
        .expect("month-year pattern is valid")
});

/// A month abbreviation standing on its own, e.g. the `Mar` in `Coursera Mar`.
static MONTH_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\b")
        .expect("month word pattern is valid")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)[0-9]{2}\b").expect("year pattern is valid"));

/// Resolved start/end of a textual date range. A missing `end` means the
/// range is open (current) or could not be determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Start date, or today (UTC) when none was found.
    pub fn start_or_today(&self) -> NaiveDate {
        self.start.unwrap_or_else(today)
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// True if the line carries a month-year token and so delimits a timeline entry.
pub fn contains_date_range(line: &str) -> bool {
    MONTH_YEAR.is_match(line)
}

pub fn contains_month(line: &str) -> bool {
    MONTH_WORD.is_match(line)
}

/// Byte offset where the date portion of a delimiter line begins: the first
/// month-year token, else the first standalone month name.
pub fn find_date_start(line: &str) -> Option<usize> {
    MONTH_YEAR
        .find(line)
        .or_else(|| MONTH_WORD.find(line))
        .map(|m| m.start())
}

/// Resolves free text such as `Jan 2020 - Dec 2021` into a [`DateRange`].
///
/// Month-year pairs win over bare years. Two or more dates give start and
/// end, one gives a start only. Any mention of "present" leaves the end open
/// regardless of what else matched.
pub fn resolve_date_range(text: &str) -> DateRange {
    let open_ended = text.to_lowercase().contains("present");

    let month_dates: Vec<NaiveDate> = MONTH_YEAR
        .captures_iter(text)
        .filter_map(|caps| {
            let year = caps[2].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month_number(&caps[1]), 1)
        })
        .collect();

    let dates = if month_dates.is_empty() {
        YEAR.find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .collect()
    } else {
        month_dates
    };

    match dates.as_slice() {
        [] => DateRange::default(),
        [start] => DateRange {
            start: Some(*start),
            end: None,
        },
        [start, end, ..] => DateRange {
            start: Some(*start),
            end: (!open_ended).then_some(*end),
        },
    }
}

fn month_number(abbr: &str) -> u32 {
    match abbr {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => 1,
    }
}
