//! The datetime window an itinerary must fit inside.

use chrono::{Days, NaiveDateTime, NaiveTime};

use super::time::{DateTimeSchedule, TripSchedule};

/// A trip's calendar-date span as a datetime interval.
///
/// The window opens at midnight of the first day and closes at midnight
/// after the last day, so the whole of the final calendar day is usable.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{TripSchedule, TripWindow, parse_date_time};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap();
/// let window = TripWindow::from_schedule(&TripSchedule::new(d(20), d(22)).unwrap());
///
/// let t = |s| parse_date_time(s).unwrap();
/// assert!(window.contains(t("2023-10-20 00:00"), t("2023-10-22 23:59")));
/// assert!(window.contains(t("2023-10-22 22:00"), t("2023-10-23 00:00")));
/// assert!(!window.contains(t("2023-10-19 23:59"), t("2023-10-20 10:00")));
/// assert!(!window.contains(t("2023-10-23 09:00"), t("2023-10-23 10:00")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TripWindow {
    /// Build the window for a trip schedule.
    pub fn from_schedule(schedule: &TripSchedule) -> Self {
        let start = schedule.start_date().and_time(NaiveTime::MIN);
        let end = schedule
            .end_date()
            .checked_add_days(Days::new(1))
            .map(|next| next.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);

        Self { start, end }
    }

    /// Midnight at the start of the trip's first day.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Midnight after the trip's last day.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// True if a candidate interval lies within the window.
    ///
    /// Only the candidate's start is compared to the window start and its
    /// end to the window end; a reversed candidate is not rejected here.
    pub fn contains(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start >= self.start && end <= self.end
    }

    /// `contains` applied to a segment schedule.
    pub fn contains_schedule(&self, schedule: &DateTimeSchedule) -> bool {
        self.contains(schedule.start_date_time(), schedule.end_date_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_date_time;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn t(s: &str) -> NaiveDateTime {
        parse_date_time(s).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate) -> TripWindow {
        TripWindow::from_schedule(&TripSchedule::new(start, end).unwrap())
    }

    #[test]
    fn window_bounds() {
        let w = window(date(2023, 10, 20), date(2023, 10, 22));
        assert_eq!(w.start(), t("2023-10-20 00:00"));
        assert_eq!(w.end(), t("2023-10-23 00:00"));
    }

    #[test]
    fn day_trip_covers_one_day() {
        let w = window(date(2023, 10, 20), date(2023, 10, 20));
        assert!(w.contains(t("2023-10-20 00:00"), t("2023-10-21 00:00")));
        assert!(!w.contains(t("2023-10-20 00:00"), t("2023-10-21 00:01")));
    }

    #[test]
    fn window_crosses_month_end() {
        let w = window(date(2023, 10, 30), date(2023, 10, 31));
        assert_eq!(w.end(), t("2023-11-01 00:00"));
    }

    #[test]
    fn segment_inside_window() {
        let w = window(date(2023, 10, 20), date(2023, 10, 22));
        assert!(w.contains(t("2023-10-20 09:00"), t("2023-10-20 18:00")));
    }

    #[test]
    fn segment_after_window() {
        let w = window(date(2023, 10, 20), date(2023, 10, 22));
        assert!(!w.contains(t("2023-10-23 09:00"), t("2023-10-23 10:00")));
    }

    #[test]
    fn segment_straddling_start() {
        let w = window(date(2023, 10, 20), date(2023, 10, 22));
        assert!(!w.contains(t("2023-10-19 22:00"), t("2023-10-20 02:00")));
    }

    #[test]
    fn contains_schedule_matches_contains() {
        let w = window(date(2023, 10, 20), date(2023, 10, 22));
        let schedule = DateTimeSchedule::parse("2023-10-21 08:00", "2023-10-22 20:00").unwrap();
        assert!(w.contains_schedule(&schedule));
    }

    #[test]
    fn last_representable_date_does_not_overflow() {
        let w = window(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(w.end(), NaiveDateTime::MAX);
    }
}
