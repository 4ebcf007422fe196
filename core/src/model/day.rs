use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::engine;
use crate::model::log::LogData;
use crate::model::settings::Settings;
use crate::model::totals::RowTotals;

/// The working ledger of one banca for one day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayState {
    pub date: NaiveDate,
    pub log: LogData,
    pub settings: Settings,
}

impl DayState {
    pub fn new(date: NaiveDate, settings: Settings) -> Self {
        Self {
            date,
            log: LogData::default(),
            settings,
        }
    }

    /// Same settings, zeroed log.
    pub fn next_day(&self, date: NaiveDate) -> Self {
        Self::new(date, self.settings.clone())
    }
}

/// An archived day. `id` is the ISO date; saving the same date again replaces it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedDay {
    pub id: String,
    pub date: NaiveDate,
    pub log: LogData,
    pub settings: Settings,
    pub totals: RowTotals,
}

impl SavedDay {
    /// Snapshots `state`, recomputing totals from its own log and settings.
    pub fn snapshot(state: &DayState) -> Self {
        let derived = engine::compute_derived(&state.log, &state.settings);
        Self {
            id: state.date.format("%Y-%m-%d").to_string(),
            date: state.date,
            log: state.log,
            settings: state.settings.clone(),
            totals: derived.row_totals,
        }
    }

    pub fn state(&self) -> DayState {
        DayState {
            date: self.date,
            log: self.log,
            settings: self.settings.clone(),
        }
    }
}
