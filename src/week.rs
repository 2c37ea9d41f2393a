// src/week.rs
use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// ISO-8601 calendar week: Monday-start, week 1 is the week containing the
/// year's first Thursday. Ordering is year-major, week-minor (field order
/// matters for the derived `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekOfYear {
    pub year: i32,
    pub week: u32,
}

impl WeekOfYear {
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Number of ISO weeks in `year` (52 or 53). 28 December always falls in
    /// the last ISO week of its year.
    pub fn weeks_in_year(year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, 12, 28)
            .expect("28 December exists in every year")
            .iso_week()
            .week()
    }

    /// The following calendar week, rolling over to week 1 of the next year
    /// after the year's last ISO week.
    pub fn next(self) -> Self {
        if self.week == Self::weeks_in_year(self.year) {
            Self {
                year: self.year + 1,
                week: 1,
            }
        } else {
            Self {
                year: self.year,
                week: self.week + 1,
            }
        }
    }

    /// Closed inclusive sequence of consecutive weeks from `self` to `end`.
    /// Requires `self <= end`.
    pub fn until(self, end: WeekOfYear) -> Result<Vec<WeekOfYear>> {
        if self > end {
            bail!("cannot enumerate weeks from {} back to {}", self, end);
        }

        let mut weeks = vec![self];
        let mut current = self;
        while current < end {
            current = current.next();
            weeks.push(current);
        }
        Ok(weeks)
    }
}

impl fmt::Display for WeekOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week {} of {}", self.week, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .unwrap_or_else(|_| panic!("Invalid date string format: {}", date_str))
    }

    fn wk(year: i32, week: u32) -> WeekOfYear {
        WeekOfYear { year, week }
    }

    #[test]
    fn from_date_follows_iso_year_boundaries() {
        // 1 Jan 2016 is a Friday, still in the last week of 2015.
        assert_eq!(WeekOfYear::from_date(d("2016-01-01")), wk(2015, 53));
        // 30 Dec 2024 is a Monday, already in week 1 of 2025.
        assert_eq!(WeekOfYear::from_date(d("2024-12-30")), wk(2025, 1));
        assert_eq!(WeekOfYear::from_date(d("2024-01-01")), wk(2024, 1));
        assert_eq!(WeekOfYear::from_date(d("2024-01-07")), wk(2024, 1));
        assert_eq!(WeekOfYear::from_date(d("2024-01-08")), wk(2024, 2));
    }

    #[test]
    fn weeks_in_year_is_52_or_53() {
        assert_eq!(WeekOfYear::weeks_in_year(2020), 53);
        assert_eq!(WeekOfYear::weeks_in_year(2023), 52);
        assert_eq!(WeekOfYear::weeks_in_year(2024), 52);
    }

    #[test]
    fn next_steps_within_the_year() {
        assert_eq!(wk(2024, 1).next(), wk(2024, 2));
        assert_eq!(wk(2024, 51).next(), wk(2024, 52));
    }

    #[test]
    fn next_rolls_over_after_the_last_week() {
        assert_eq!(wk(2023, 52).next(), wk(2024, 1));
        assert_eq!(wk(2020, 53).next(), wk(2021, 1));
    }

    #[test]
    fn next_walks_a_whole_year_without_skipping() {
        for year in [2020, 2023] {
            let total = WeekOfYear::weeks_in_year(year);
            let mut current = wk(year, 1);
            for expected in 2..=total {
                current = current.next();
                assert_eq!(current, wk(year, expected));
            }
            assert_eq!(current.next(), wk(year + 1, 1));
        }
    }

    #[test]
    fn until_is_inclusive_at_both_ends() {
        let weeks = wk(2024, 2).until(wk(2024, 5)).unwrap();
        assert_eq!(weeks, vec![wk(2024, 2), wk(2024, 3), wk(2024, 4), wk(2024, 5)]);
    }

    #[test]
    fn until_a_single_week_is_that_week() {
        assert_eq!(wk(2024, 7).until(wk(2024, 7)).unwrap(), vec![wk(2024, 7)]);
    }

    #[test]
    fn until_crosses_year_boundaries() {
        let weeks = wk(2023, 51).until(wk(2024, 2)).unwrap();
        assert_eq!(
            weeks,
            vec![wk(2023, 51), wk(2023, 52), wk(2024, 1), wk(2024, 2)]
        );
    }

    #[test]
    fn until_rejects_reversed_bounds() {
        assert!(wk(2024, 3).until(wk(2024, 2)).is_err());
        assert!(wk(2024, 1).until(wk(2023, 52)).is_err());
    }

    #[test]
    fn ordering_is_year_major() {
        assert!(wk(2024, 1) < wk(2024, 2));
        assert!(wk(2023, 52) < wk(2024, 1));
        assert!(wk(2024, 53) < wk(2025, 1));
    }
}
