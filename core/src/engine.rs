//! Ledger calculations.
//!
//! Everything here is a pure function of a log and its settings. Commissions
//! are rounded to the cent with round-half-away-from-zero
//! (`(value * 100).round() / 100`), once, after the multiplication. Balances
//! are never rounded on their own. Row totals are accumulated in integer
//! cents when every summed value is a cent amount; sub-cent or very large
//! values are summed as plain floats.
//!
//! Rates are not range-checked: any finite percentage, negative or above
//! 100, is applied as given. Validation happens where settings are entered
//! (see [`Settings::validate`]).

use serde::{Deserialize, Serialize};

use crate::model::{Column, ColumnValues, LogData, PeriodTotal, RowTotals, SavedDay, Settings};

pub type Commissions = ColumnValues;
pub type Balances = ColumnValues;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Derived {
    pub commissions: Commissions,
    pub balances: Balances,
    pub row_totals: RowTotals,
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// 2^53: above this many cents an f64 no longer holds every whole cent.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;
// How far from a whole cent a value may sit and still count as cent-precise.
const CENT_TOLERANCE: f64 = 1e-6;

/// Whole cents of `value`, or `None` when it is not a cent amount within
/// floating noise or is too large to hold every cent exactly.
fn exact_cents(value: f64) -> Option<i64> {
    let scaled = value * 100.0;
    let cents = scaled.round();
    if !cents.is_finite() || cents.abs() > MAX_EXACT_CENTS || (scaled - cents).abs() > CENT_TOLERANCE {
        return None;
    }
    Some(cents as i64)
}

/// Sums in integer cents when every value is a cent amount, otherwise in
/// plain floating point.
fn sum_values(values: &ColumnValues) -> f64 {
    let cents = values
        .iter()
        .try_fold(0i64, |acc, (_, v)| acc.checked_add(exact_cents(v)?));
    match cents {
        Some(cents) => cents as f64 / 100.0,
        None => values.iter().map(|(_, v)| v).sum(),
    }
}

pub fn commission(entradas: f64, settings: &Settings, column: Column) -> f64 {
    round_cents(entradas * settings.rate_for(column).fraction())
}

pub fn compute_derived(log: &LogData, settings: &Settings) -> Derived {
    let commissions = ColumnValues::from_fn(|c| commission(log.entradas[c], settings, c));
    let balances = ColumnValues::from_fn(|c| log.entradas[c] - commissions[c] - log.premios[c]);

    let row_totals = RowTotals {
        entradas: sum_values(&log.entradas),
        comissao: sum_values(&commissions),
        premios: sum_values(&log.premios),
        saldo_final: sum_values(&balances),
    };

    Derived {
        commissions,
        balances,
        row_totals,
    }
}

/// True when a column took money in but its commission and prizes exceed it.
pub fn is_warned_negative(log: &LogData, commissions: &Commissions, column: Column) -> bool {
    let entradas = log.entradas[column];
    entradas > 0.0 && entradas < commissions[column] + log.premios[column]
}

impl Derived {
    pub fn warnings(&self, log: &LogData) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| is_warned_negative(log, &self.commissions, *c))
            .collect()
    }

    pub fn column_totals(&self, log: &LogData, column: Column) -> RowTotals {
        RowTotals {
            entradas: log.entradas[column],
            comissao: self.commissions[column],
            premios: log.premios[column],
            saldo_final: self.balances[column],
        }
    }
}

/// Each period combined with its paired group column.
pub fn period_totals(log: &LogData, derived: &Derived) -> [PeriodTotal; 3] {
    Column::PERIODS.map(|period| PeriodTotal {
        period,
        totals: derived.column_totals(log, period) + derived.column_totals(log, period.paired()),
    })
}

/// Sums the archived totals of `days`. Logs are not re-read: stored totals are
/// authoritative for past days even if settings changed since.
pub fn aggregate_totals<'a, I>(days: I) -> RowTotals
where
    I: IntoIterator<Item = &'a SavedDay>,
{
    days.into_iter().map(|d| d.totals).sum()
}
