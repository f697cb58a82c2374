use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// Length of the trailing observation window requested from the weather API.
pub const WINDOW_DAYS: i64 = 30;

/// The date window of a weather request: `[today - days, today]`, inclusive
/// on both ends, in the server's local date context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchWindow {
    /// Window ending at `today` and reaching `days` back.
    pub fn trailing(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - TimeDelta::try_days(days).unwrap(),
            end: today,
        }
    }

    /// Number of days covered, counting both endpoints. A 30-day trailing
    /// window covers 31 days.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate the covered dates in chronological order.
    pub fn days(&self) -> DateRange {
        DateRange(self.start, self.end)
    }
}

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DateRange, FetchWindow, WINDOW_DAYS};
    use chrono::NaiveDate;

    #[test]
    fn test_trailing_window_covers_31_days() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let window = FetchWindow::trailing(today, WINDOW_DAYS);
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2026, 7, 7).unwrap());
        assert_eq!(window.end, today);
        assert_eq!(window.num_days(), 31);
        assert_eq!(window.days().count(), 31);
    }

    #[test]
    fn test_window_days_strictly_increasing() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let dates: Vec<NaiveDate> = FetchWindow::trailing(today, 5).days().collect();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(dates.first(), Some(&NaiveDate::from_ymd_opt(2026, 2, 25).unwrap()));
        assert_eq!(dates.last(), Some(&today));
    }

    #[test]
    fn test_date_range_single_day() {
        let day = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let dates: Vec<NaiveDate> = DateRange(day, day).collect();
        assert_eq!(dates, vec![day]);
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
        assert_eq!(DateRange(start, end).count(), 0);
    }
}
