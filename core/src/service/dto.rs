use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::engine::{self, is_warned_negative};
use crate::model::{BancaId, Column, DayState, Percent, PeriodTotal, RowTotals};

/// One column of the day sheet with its derived values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRow {
    pub column: Column,
    pub label: String,
    pub entradas: f64,
    pub comissao: f64,
    pub premios: f64,
    pub saldo: f64,
    pub warned_negative: bool,
}

/// Everything a front end needs to render the current day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub banca: BancaId,
    pub banca_name: String,
    pub date: NaiveDate,
    pub commission_period: Percent,
    pub commission_group: Percent,
    pub rows: Vec<ColumnRow>,
    pub periods: Vec<PeriodTotal>,
    pub totals: RowTotals,
}

impl DayView {
    pub fn from_state(banca: &BancaId, state: &DayState) -> Self {
        let derived = engine::compute_derived(&state.log, &state.settings);

        let rows = Column::ALL
            .into_iter()
            .map(|column| ColumnRow {
                column,
                label: column.label().to_string(),
                entradas: state.log.entradas[column],
                comissao: derived.commissions[column],
                premios: state.log.premios[column],
                saldo: derived.balances[column],
                warned_negative: is_warned_negative(&state.log, &derived.commissions, column),
            })
            .collect();

        Self {
            banca: banca.clone(),
            banca_name: state.settings.banca_name.clone(),
            date: state.date,
            commission_period: state.settings.commission_period,
            commission_group: state.settings.commission_group,
            rows,
            periods: engine::period_totals(&state.log, &derived).to_vec(),
            totals: derived.row_totals,
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ColumnRow> {
        self.rows.iter().filter(|r| r.warned_negative)
    }
}
