//! Date type for tenancy calculations.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{RentflowError, RentflowResult};

/// A calendar date with no time component.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// month arithmetic used by proration and billing.
///
/// # Example
///
/// ```rust
/// use rentflow_core::types::Date;
///
/// let move_in = Date::from_ymd(2024, 2, 15).unwrap();
/// assert_eq!(move_in.days_in_month(), 29);
/// assert_eq!(move_in.days_remaining_in_month(), 15);
/// assert_eq!(move_in.start_of_next_month().unwrap().to_string(), "2024-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `RentflowError::InvalidArgument` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> RentflowResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                RentflowError::invalid_argument(
                    "date",
                    format!("{year}-{month:02}-{day:02} is not a calendar date"),
                )
            })
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RentflowError::InvalidArgument` if the string is not a valid date.
    pub fn parse(s: &str) -> RentflowResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| {
                RentflowError::invalid_argument("date", format!("cannot parse {s:?} as YYYY-MM-DD"))
            })
    }

    /// Returns today's date in the local timezone.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Days from this date through the end of its month, both inclusive.
    ///
    /// Always in `1..=days_in_month()`.
    #[must_use]
    pub fn days_remaining_in_month(&self) -> u32 {
        self.days_in_month() - self.day() + 1
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `RentflowError::ComputationOverflow` if the result is out of range.
    pub fn add_days(&self, days: u64) -> RentflowResult<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| RentflowError::overflow("date addition"))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `RentflowError::InvalidArgument` if the result is out of range.
    pub fn add_months(&self, months: u32) -> RentflowResult<Self> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| {
                RentflowError::invalid_argument(
                    "date",
                    format!("{self} plus {months} months is out of range"),
                )
            })
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(self.0 - chrono::Duration::days(i64::from(self.day()) - 1))
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        let start = self.start_of_month();
        Date(start.0 + chrono::Duration::days(i64::from(self.days_in_month()) - 1))
    }

    /// Returns the first day of the following month.
    ///
    /// # Errors
    ///
    /// Returns `RentflowError::ComputationOverflow` past the last representable date.
    pub fn start_of_next_month(&self) -> RentflowResult<Self> {
        self.end_of_month().add_days(1)
    }

    /// Checks if the date is the first of its month.
    #[must_use]
    pub fn is_start_of_month(&self) -> bool {
        self.day() == 1
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = RentflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        // chrono never yields a month outside 1..=12
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
