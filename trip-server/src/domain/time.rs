//! Date and time handling for trips and itinerary schedules.
//!
//! Itinerary times cross the service boundary as `yyyy-MM-dd HH:mm` strings
//! (e.g. "2023-10-25 12:00"). Trips are bounded by calendar dates with no
//! time of day. This module provides the parsing and the schedule types
//! built on top of it.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// chrono format string for the boundary datetime pattern `yyyy-MM-dd HH:mm`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Error returned when a datetime string does not match `yyyy-MM-dd HH:mm`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid datetime {input:?}: expected yyyy-MM-dd HH:mm")]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a datetime in the fixed `yyyy-MM-dd HH:mm` pattern.
///
/// The match is exact: single-digit fields, seconds, surrounding whitespace
/// and a `T` separator are all rejected, so a parsed value always formats
/// back to the input.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{format_date_time, parse_date_time};
///
/// let dt = parse_date_time("2023-10-25 12:00").unwrap();
/// assert_eq!(format_date_time(dt), "2023-10-25 12:00");
///
/// assert!(parse_date_time("2023-10-25T12:00").is_err());
/// assert!(parse_date_time("2023-10-25 12:00:00").is_err());
/// assert!(parse_date_time("2023-1-25 12:00").is_err());
/// ```
pub fn parse_date_time(s: &str) -> Result<NaiveDateTime, DateParseError> {
    let err = || DateParseError {
        input: s.to_string(),
    };

    // chrono accepts unpadded fields, so pin the shape first
    if s.len() != 16 || !s.is_ascii() {
        return Err(err());
    }

    let parsed = NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).map_err(|_| err())?;
    if format_date_time(parsed) != s {
        return Err(err());
    }
    Ok(parsed)
}

/// Format a datetime in the `yyyy-MM-dd HH:mm` pattern.
pub fn format_date_time(dt: NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// A (start, end) datetime pair for one itinerary segment.
///
/// No ordering is enforced here; an out-of-order schedule is representable
/// and is rejected by the itinerary validator instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeSchedule {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateTimeSchedule {
    /// Create a schedule from already-parsed datetimes.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parse both ends of a schedule from boundary strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateParseError> {
        Ok(Self {
            start: parse_date_time(start)?,
            end: parse_date_time(end)?,
        })
    }

    pub fn start_date_time(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end_date_time(&self) -> NaiveDateTime {
        self.end
    }

    /// True if the schedule does not run backwards. Equal ends are allowed.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Debug for DateTimeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DateTimeSchedule({} -> {})",
            format_date_time(self.start),
            format_date_time(self.end)
        )
    }
}

impl fmt::Display for DateTimeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ~ {}",
            format_date_time(self.start),
            format_date_time(self.end)
        )
    }
}

/// Error returned when a trip's start date falls after its end date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("start date {start} must not be after end date {end}")]
pub struct InvalidDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The inclusive calendar-date span of a trip.
///
/// A `TripSchedule` always satisfies `start_date <= end_date`; a one-day
/// trip has equal dates.
///
/// # Examples
///
/// ```
/// use trip_server::domain::TripSchedule;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap();
///
/// assert!(TripSchedule::new(d(20), d(22)).is_ok());
/// assert!(TripSchedule::new(d(20), d(20)).is_ok());
/// assert!(TripSchedule::new(d(22), d(20)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripSchedule {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TripSchedule {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start_date > end_date {
            return Err(InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
