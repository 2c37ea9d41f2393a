// src/leave_parser.rs
use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::week::WeekOfYear;

// --- Cell Patterns ---

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_LEN: usize = 10;

static FULL_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("full day pattern"));
static HALF_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4} (am|pm)$").expect("half day pattern"));
static DAY_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4} - \d{2}/\d{2}/\d{4}$").expect("day range pattern"));

/// The recognised shapes of a leave cell, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    FullDay,
    HalfDay,
    DayRange,
    Unrecognized,
}

pub fn classify(text: &str) -> CellKind {
    if FULL_DAY.is_match(text) {
        CellKind::FullDay
    } else if HALF_DAY.is_match(text) {
        CellKind::HalfDay
    } else if DAY_RANGE.is_match(text) {
        CellKind::DayRange
    } else {
        CellKind::Unrecognized
    }
}

// --- Observations ---

/// One day of leave: a calendar date and the amount taken (1 for a full day,
/// 0.5 for a half day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveObservation {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl LeaveObservation {
    pub fn week(&self) -> WeekOfYear {
        WeekOfYear::from_date(self.date)
    }
}

/// Expands one raw cell into its leave observations. A cell that matches no
/// pattern, carries an impossible calendar date, or spans a reversed range is
/// reported and yields nothing; the caller moves on to the next cell.
pub fn parse_cell(text: &str) -> Vec<LeaveObservation> {
    match expand_cell(text) {
        Some(observations) => observations,
        None => {
            warn!("Failed to parse cell containing '{}'", text);
            Vec::new()
        }
    }
}

fn expand_cell(text: &str) -> Option<Vec<LeaveObservation>> {
    match classify(text) {
        CellKind::FullDay => {
            let date = parse_date(text)?;
            Some(vec![LeaveObservation {
                date,
                amount: dec!(1),
            }])
        }
        CellKind::HalfDay => {
            // The am/pm suffix only signals a half day; both halves count 0.5.
            let date = parse_date(&text[..DATE_LEN])?;
            Some(vec![LeaveObservation {
                date,
                amount: dec!(0.5),
            }])
        }
        CellKind::DayRange => {
            let start = parse_date(&text[..DATE_LEN])?;
            let end = parse_date(&text[DATE_LEN + 3..])?;
            if start > end {
                return None;
            }
            Some(
                working_days(start, end)
                    .into_iter()
                    .map(|date| LeaveObservation {
                        date,
                        amount: dec!(1),
                    })
                    .collect(),
            )
        }
        CellKind::Unrecognized => None,
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Every day from `start` to `end` inclusive, Saturdays and Sundays excluded.
fn working_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(current);
        }
        current = current.succ_opt().expect("date overflow walking day range");
    }
    days
}
