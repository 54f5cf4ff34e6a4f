//! Holiday validation rules.
//!
//! Everything here is pure: the database-backed checks in [`crate::holidays`]
//! fetch the numbers and hand them to these functions.

use chrono::{Datelike, NaiveDate};

use crate::config::LeaveConfig;
use crate::error::{AppError, Result};

/// Date format accepted in forms and on the command line.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict ISO local date (`YYYY-MM-DD`, zero padded).
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let bytes = trimmed.as_bytes();

    // chrono accepts unpadded fields, the form must not.
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return Err(AppError::InvalidDate(trimmed.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|_| AppError::InvalidDate(trimmed.to_string()))
}

/// A validated holiday date range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl HolidayPeriod {
    /// Build a period; the end must fall strictly after the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(AppError::EndNotAfterStart);
        }
        Ok(Self { start, end })
    }

    /// Parse both dates, then build the period.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_iso_date(start)?;
        let end = parse_iso_date(end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days, counting both the first and the last day.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Calendar year the days are charged to.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Whether two periods share at least one day.
    pub fn overlaps(&self, other: &HolidayPeriod) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Reject holidays longer than the configured maximum.
pub fn check_duration(period: &HolidayPeriod, policy: &LeaveConfig) -> Result<()> {
    let days = period.days();
    if days > i64::from(policy.max_duration_days) {
        return Err(AppError::DurationExceeded {
            days,
            max: policy.max_duration_days,
        });
    }
    Ok(())
}

/// Reject holidays that would take the employee past the yearly allowance.
///
/// `taken` is the number of days already booked in `period.year()`.
pub fn check_allowance(taken: i64, period: &HolidayPeriod, policy: &LeaveConfig) -> Result<()> {
    let requested = period.days();
    if taken + requested > i64::from(policy.yearly_allowance_days) {
        return Err(AppError::AllowanceExceeded {
            taken,
            requested,
            allowance: policy.yearly_allowance_days,
        });
    }
    Ok(())
}

/// Sum the days of the periods charged to `year`.
pub fn days_taken_in_year<'a>(periods: impl IntoIterator<Item = &'a HolidayPeriod>, year: i32) -> i64 {
    periods
        .into_iter()
        .filter(|p| p.year() == year)
        .map(HolidayPeriod::days)
        .sum()
}

/// Days left in the yearly allowance, never negative.
pub fn remaining_allowance(taken: i64, policy: &LeaveConfig) -> i64 {
    (i64::from(policy.yearly_allowance_days) - taken).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(start: &str, end: &str) -> HolidayPeriod {
        HolidayPeriod::parse(start, end).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-01").unwrap(), date(2024, 3, 1));
        assert_eq!(parse_iso_date(" 2024-03-01\n").unwrap(), date(2024, 3, 1));
        assert_eq!(parse_iso_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_iso_date_rejects_other_shapes() {
        for bad in [
            "",
            "2024-3-1",
            "2024/03/01",
            "01-03-2024",
            "2024-03-01T00:00",
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "abcd-ef-gh",
            "+202-03-01",
        ] {
            assert!(
                matches!(parse_iso_date(bad), Err(AppError::InvalidDate(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_end_must_be_after_start() {
        assert!(matches!(
            HolidayPeriod::parse("2024-05-10", "2024-05-10"),
            Err(AppError::EndNotAfterStart)
        ));
        assert!(matches!(
            HolidayPeriod::parse("2024-05-10", "2024-05-09"),
            Err(AppError::EndNotAfterStart)
        ));
        assert!(HolidayPeriod::parse("2024-05-10", "2024-05-11").is_ok());
    }

    #[test]
    fn test_date_format_checked_before_ordering() {
        assert!(matches!(
            HolidayPeriod::parse("2024-05-10", "yesterday"),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_days_are_inclusive() {
        assert_eq!(period("2024-05-10", "2024-05-11").days(), 2);
        assert_eq!(period("2024-01-01", "2024-01-25").days(), 25);
        assert_eq!(period("2024-02-28", "2024-03-01").days(), 3);
    }

    #[test]
    fn test_duration_boundary() {
        let policy = LeaveConfig::default();

        assert!(check_duration(&period("2024-01-01", "2024-01-25"), &policy).is_ok());

        match check_duration(&period("2024-01-01", "2024-01-26"), &policy) {
            Err(AppError::DurationExceeded { days, max }) => {
                assert_eq!(days, 26);
                assert_eq!(max, 25);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_overlap_cases() {
        let base = period("2024-06-10", "2024-06-20");

        // Straddles the start
        assert!(base.overlaps(&period("2024-06-05", "2024-06-10")));
        // Straddles the end
        assert!(base.overlaps(&period("2024-06-20", "2024-06-25")));
        // Inside
        assert!(base.overlaps(&period("2024-06-12", "2024-06-14")));
        // Encloses
        assert!(base.overlaps(&period("2024-06-01", "2024-06-30")));
        // Adjacent but disjoint
        assert!(!base.overlaps(&period("2024-06-01", "2024-06-09")));
        assert!(!base.overlaps(&period("2024-06-21", "2024-06-22")));
    }

    #[test]
    fn test_allowance() {
        let policy = LeaveConfig::default();
        let ten_days = period("2024-07-01", "2024-07-10");

        assert!(check_allowance(15, &ten_days, &policy).is_ok());

        match check_allowance(16, &ten_days, &policy) {
            Err(AppError::AllowanceExceeded {
                taken,
                requested,
                allowance,
            }) => {
                assert_eq!((taken, requested, allowance), (16, 10, 25));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_days_taken_counts_start_year_only() {
        let periods = [
            period("2024-01-10", "2024-01-14"),
            period("2024-12-30", "2025-01-02"),
            period("2025-03-01", "2025-03-02"),
        ];

        assert_eq!(days_taken_in_year(&periods, 2024), 5 + 4);
        assert_eq!(days_taken_in_year(&periods, 2025), 2);
        assert_eq!(days_taken_in_year(&periods, 2023), 0);
    }

    #[test]
    fn test_remaining_allowance_saturates() {
        let policy = LeaveConfig::default();
        assert_eq!(remaining_allowance(10, &policy), 15);
        assert_eq!(remaining_allowance(30, &policy), 0);
    }
}
