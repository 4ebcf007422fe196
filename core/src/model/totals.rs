use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::model::column::Column;

/// Entradas, commission, prêmios and balance summed over a set of columns or days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RowTotals {
    pub entradas: f64,
    pub comissao: f64,
    pub premios: f64,
    pub saldo_final: f64,
}

/// The current day's row totals.
pub type GrandTotals = RowTotals;

impl Add for RowTotals {
    type Output = RowTotals;

    fn add(self, rhs: RowTotals) -> RowTotals {
        RowTotals {
            entradas: self.entradas + rhs.entradas,
            comissao: self.comissao + rhs.comissao,
            premios: self.premios + rhs.premios,
            saldo_final: self.saldo_final + rhs.saldo_final,
        }
    }
}

impl AddAssign for RowTotals {
    fn add_assign(&mut self, rhs: RowTotals) {
        *self = *self + rhs;
    }
}

impl Sum for RowTotals {
    fn sum<I: Iterator<Item = RowTotals>>(iter: I) -> RowTotals {
        iter.fold(RowTotals::default(), Add::add)
    }
}

/// A period column combined with its paired group column.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PeriodTotal {
    pub period: Column,
    pub totals: RowTotals,
}
