use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::day::{DayState, SavedDay};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BancaId(String);

impl BancaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BancaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BancaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Everything that is persisted: the working day of every banca and their archives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStore {
    pub selected_banca: BancaId,
    pub bancas: BTreeMap<BancaId, DayState>,
    #[serde(default)]
    pub saved_days: BTreeMap<BancaId, Vec<SavedDay>>,
}

impl LedgerStore {
    pub fn new(selected_banca: BancaId) -> Self {
        Self {
            selected_banca,
            bancas: BTreeMap::new(),
            saved_days: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> Option<&DayState> {
        self.bancas.get(&self.selected_banca)
    }

    pub fn saved(&self, banca: &BancaId) -> &[SavedDay] {
        self.saved_days.get(banca).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inserts or replaces the snapshot with the same date, keeping the archive in date order.
    pub fn upsert_saved(&mut self, banca: &BancaId, day: SavedDay) {
        let days = self.saved_days.entry(banca.clone()).or_default();
        if let Some(pos) = days.iter().position(|d| d.date == day.date) {
            days[pos] = day;
        } else {
            days.push(day);
            days.sort_by_key(|d| d.date);
        }
    }
}
