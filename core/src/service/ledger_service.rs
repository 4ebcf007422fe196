use crate::config::Config;
use crate::engine::{self, Derived};
use crate::error::LedgerError;
use crate::model::{
    BancaId, Column, DayState, Field, LedgerStore, PeriodTotal, SavedDay, SettingsPatch,
};
use crate::repository::LedgerRepository;
use crate::service::dto::DayView;
use crate::transfer;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Owns the ledger of every banca and writes it back through the repository
/// after each change.
///
/// Mutations take `&mut self`, so there is a single writer at a time and
/// derived values are always computed from a consistent log and settings.
pub struct LedgerService<R: LedgerRepository> {
    repo: R,
    store: LedgerStore,
}

impl<R: LedgerRepository> LedgerService<R> {
    /// Loads the stored ledger, adding any banca listed in `config` that is
    /// not there yet (dated `today`, default settings).
    pub fn load(repo: R, config: &Config, today: NaiveDate) -> Result<Self> {
        let first = config
            .bancas
            .first()
            .ok_or_else(|| anyhow!("No banca configured"))?;

        let mut store = match repo.load()? {
            Some(store) => store,
            None => {
                tracing::info!("no stored ledger, starting a new one");
                LedgerStore::new(first.id.clone())
            }
        };

        for banca in &config.bancas {
            store
                .bancas
                .entry(banca.id.clone())
                .or_insert_with(|| DayState::new(today, config.default_settings(banca)));
        }

        if !store.bancas.contains_key(&store.selected_banca) {
            tracing::warn!(banca = %store.selected_banca, "selected banca not found, falling back to {}", first.id);
            store.selected_banca = first.id.clone();
        }

        Ok(Self { repo, store })
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn bancas(&self) -> impl Iterator<Item = (&BancaId, &DayState)> {
        self.store.bancas.iter()
    }

    pub fn selected_banca(&self) -> &BancaId {
        &self.store.selected_banca
    }

    pub fn select_banca(&mut self, id: &str) -> Result<()> {
        let id = BancaId::from(id);
        if !self.store.bancas.contains_key(&id) {
            return Err(LedgerError::UnknownBanca(id.to_string()).into());
        }
        self.commit(|store| {
            store.selected_banca = id;
            Ok(())
        })?;
        tracing::info!(banca = %self.store.selected_banca, "banca selected");
        Ok(())
    }

    pub fn current(&self) -> Result<&DayState> {
        self.store
            .current()
            .ok_or_else(|| LedgerError::UnknownBanca(self.store.selected_banca.to_string()).into())
    }

    pub fn derived(&self) -> Result<Derived> {
        let current = self.current()?;
        Ok(engine::compute_derived(&current.log, &current.settings))
    }

    pub fn period_totals(&self) -> Result<[PeriodTotal; 3]> {
        let current = self.current()?;
        Ok(engine::period_totals(&current.log, &self.derived()?))
    }

    pub fn warnings(&self) -> Result<Vec<Column>> {
        let current = self.current()?;
        Ok(self.derived()?.warnings(&current.log))
    }

    pub fn view(&self) -> Result<DayView> {
        Ok(DayView::from_state(self.selected_banca(), self.current()?))
    }

    /// Edits a single cell of the current day.
    pub fn update_log(&mut self, column: Column, field: Field, value: f64) -> Result<()> {
        self.update_cells(column, &[(field, value)])
    }

    /// Writes several fields of one column in a single change. Nothing is
    /// written if any value is not finite.
    pub fn update_cells(&mut self, column: Column, values: &[(Field, f64)]) -> Result<()> {
        if let Some((_, bad)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LedgerError::InvalidAmount(*bad).into());
        }
        self.commit(|store| {
            let day = current_in(store)?;
            for (field, value) in values {
                day.log.set(column, *field, *value);
            }
            Ok(())
        })
    }

    /// Applies `patch` only if the resulting settings are valid.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<()> {
        let updated = patch.apply_to(&self.current()?.settings);
        updated.validate()?;
        self.commit(|store| {
            current_in(store)?.settings = updated;
            Ok(())
        })?;
        tracing::info!(banca = %self.store.selected_banca, "settings updated");
        Ok(())
    }

    /// Starts `date` with an empty log, keeping the current settings.
    pub fn new_day(&mut self, date: NaiveDate) -> Result<()> {
        let next = self.current()?.next_day(date);
        self.commit(|store| {
            *current_in(store)? = next;
            Ok(())
        })?;
        tracing::info!(banca = %self.store.selected_banca, %date, "new day started");
        Ok(())
    }

    /// Archives the current day, replacing an earlier save of the same date.
    /// The working day is left as is.
    pub fn save_day(&mut self) -> Result<SavedDay> {
        let saved = SavedDay::snapshot(self.current()?);
        let banca = self.store.selected_banca.clone();
        self.commit(|store| {
            store.upsert_saved(&banca, saved.clone());
            Ok(())
        })?;
        tracing::info!(banca = %banca, date = %saved.date, "day saved");
        Ok(saved)
    }

    pub fn saved_days(&self) -> &[SavedDay] {
        self.store.saved(&self.store.selected_banca)
    }

    pub fn saved_days_for(&self, banca: &str) -> Result<&[SavedDay]> {
        let banca = BancaId::from(banca);
        if !self.store.bancas.contains_key(&banca) {
            return Err(LedgerError::UnknownBanca(banca.to_string()).into());
        }
        Ok(self.store.saved(&banca))
    }

    pub fn delete_saved_day(&mut self, date: NaiveDate) -> Result<()> {
        let banca = self.store.selected_banca.clone();
        self.commit(|store| {
            let days = store
                .saved_days
                .get_mut(&banca)
                .ok_or(LedgerError::NoSavedDay(date))?;
            let pos = days
                .iter()
                .position(|d| d.date == date)
                .ok_or(LedgerError::NoSavedDay(date))?;
            days.remove(pos);
            Ok(())
        })?;
        tracing::info!(banca = %banca, %date, "saved day deleted");
        Ok(())
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(transfer::export_day(self.current()?)?)
    }

    /// Replaces the current day with an exported document. On any validation
    /// failure nothing changes.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let fallback_date = self.current()?.date;
        let imported = match transfer::import_day(text, fallback_date) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "import rejected");
                return Err(LedgerError::Import(e).into());
            }
        };
        self.commit(|store| {
            *current_in(store)? = imported;
            Ok(())
        })?;
        tracing::info!(banca = %self.store.selected_banca, "import accepted");
        Ok(())
    }

    /// Applies `change` to a copy of the store and keeps the copy only once
    /// it has been written.
    fn commit(&mut self, change: impl FnOnce(&mut LedgerStore) -> Result<()>) -> Result<()> {
        let mut next = self.store.clone();
        change(&mut next)?;
        self.repo.save(&next)?;
        self.store = next;
        Ok(())
    }
}

fn current_in(store: &mut LedgerStore) -> Result<&mut DayState> {
    let selected = store.selected_banca.clone();
    store
        .bancas
        .get_mut(&selected)
        .ok_or_else(|| LedgerError::UnknownBanca(selected.to_string()).into())
}
