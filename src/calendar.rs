use bdays::HolidayCalendar;
use bdays::calendars::WeekendsOnly;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range being queried: a week, a month, a year, or any
/// ad-hoc span. Built from `NaiveDate` values so no stray time-of-day
/// component can skew overlap comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The full calendar month, or `None` for an invalid year/month pair.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let (start, end) = month_boundaries(year, month)?;
        Some(Self { start, end })
    }

    /// The Monday-to-Sunday week containing the given date.
    pub fn week(any_date: NaiveDate) -> Self {
        let (start, end) = week_boundaries(any_date);
        Self { start, end }
    }

    /// The full calendar year, or `None` when the year is out of range.
    pub fn year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(Self { start, end })
    }

    /// Inclusive intersection of this window with `start..=end`, or `None`
    /// when the two ranges share no day.
    pub fn overlap(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        overlap((self.start, self.end), (start, end))
    }

    /// Every date in the window, in order.
    pub fn days(&self) -> Days {
        days_in_range(self.start, self.end)
    }
}

/// True unless the date falls on Saturday or Sunday. Staff holidays are
/// handled separately; this is the fixed weekend only.
pub fn is_workday(date: NaiveDate) -> bool {
    WeekendsOnly.is_bday(date)
}

/// Iterator over every date from a start to an end, both inclusive.
/// Yields nothing when the start is after the end.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let date = self.next?;
        self.next = date.succ_opt().filter(|next| *next <= self.end);
        Some(date)
    }
}

pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Days {
    Days {
        next: (start <= end).then_some(start),
        end,
    }
}

/// Count of weekday dates in `start..=end`.
pub fn count_workdays(start: NaiveDate, end: NaiveDate) -> i64 {
    days_in_range(start, end)
        .filter(|day| is_workday(*day))
        .count() as i64
}

/// ISO-8601 week number, for display labels only.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// First and last day of the calendar month, or `None` for an invalid
/// year/month pair.
pub fn month_boundaries(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first - Duration::days(1)))
}

/// Monday and Sunday of the week containing the given date.
pub fn week_boundaries(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// Inclusive intersection of two inclusive ranges, or `None` when they are
/// disjoint. A one-day range still overlaps anything containing that day.
pub fn overlap(
    a: (NaiveDate, NaiveDate),
    b: (NaiveDate, NaiveDate),
) -> Option<(NaiveDate, NaiveDate)> {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    (start <= end).then_some((start, end))
}
