// src/weekly_summary.rs
use std::collections::BTreeMap;

use anyhow::{bail, Result};
use rust_decimal::Decimal;

use crate::leave_parser::LeaveObservation;
use crate::week::WeekOfYear;

/// Total leave per ISO week, dense from the first to the last week observed.
/// `None` marks a week with no entries at all, which renders blank rather
/// than as an explicit zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySeries {
    pub first: WeekOfYear,
    pub totals: Vec<Option<Decimal>>,
}

impl WeeklySeries {
    /// Renders the series as one spreadsheet row in week order. Totals keep
    /// their natural decimal form (`1`, `0.5`, `1.5`); silent weeks are
    /// empty fields.
    pub fn to_row(&self) -> Vec<String> {
        self.totals
            .iter()
            .map(|total| match total {
                Some(amount) => amount.normalize().to_string(),
                None => String::new(),
            })
            .collect()
    }
}

/// Sums leave per ISO week and fills the gaps between the earliest and the
/// latest week observed. Input order is irrelevant.
pub fn summarise(observations: &[LeaveObservation]) -> Result<WeeklySeries> {
    let mut by_week: BTreeMap<WeekOfYear, Decimal> = BTreeMap::new();
    for observation in observations {
        *by_week.entry(observation.week()).or_insert(Decimal::ZERO) += observation.amount;
    }

    let Some(first) = by_week.keys().next().copied() else {
        bail!("no parseable leave entries found; nothing to summarise");
    };
    let last = by_week
        .keys()
        .next_back()
        .copied()
        .expect("a non-empty map has a last key");

    let totals = first
        .until(last)?
        .into_iter()
        .map(|week| by_week.get(&week).copied())
        .collect();

    Ok(WeeklySeries { first, totals })
}
