use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde_json;

use crate::config::resolve_data_dir;
use crate::model::LedgerStore;
use crate::repository::traits::LedgerRepository;

const DEFAULT_FILE_NAME: &str = "state.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Clone)]
pub struct FileLedgerRepository {
    file_path: PathBuf,
}

impl FileLedgerRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(DEFAULT_FILE_NAME);

        Ok(FileLedgerRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        self.file_path.with_extension(TMP_SUFFIX)
    }
}

impl LedgerRepository for FileLedgerRepository {
    fn load(&self) -> Result<Option<LedgerStore>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let store = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Corrupted state file {}: {}", self.file_path.display(), e))?;
        Ok(Some(store))
    }

    // Written to a sibling temp file first so a failed write never truncates the state.
    fn save(&self, store: &LedgerStore) -> Result<()> {
        let tmp = self.tmp_path();
        {
            let file = File::create(&tmp)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, store)?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.file_path)?;
        tracing::debug!(path = %self.file_path.display(), "state persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BancaId, DayState, Percent, SavedDay, Settings};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store() -> LedgerStore {
        let banca = BancaId::from("realCariri");
        let mut state = DayState::new(
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            Settings::new("Real Cariri", Percent::new(40.0), Percent::new(30.0)),
        );
        state.log.entradas.noite = 80.25;
        state.log.premios.grupo_manha = 0.07;

        let mut store = LedgerStore::new(banca.clone());
        store.upsert_saved(&banca, SavedDay::snapshot(&state));
        store.bancas.insert(banca, state);
        store
    }

    #[test]
    fn test_load_without_file() {
        let dir = TempDir::new().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().join("nested"))).unwrap();

        repo.save(&store()).unwrap();
        assert_eq!(repo.load().unwrap(), Some(store()));
        assert!(!repo.tmp_path().exists());
    }

    #[test]
    fn test_persisted_layout() {
        let dir = TempDir::new().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        repo.save(&store()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(json["selectedBanca"], "realCariri");
        assert_eq!(json["bancas"]["realCariri"]["log"]["entradas"]["noite"], 80.25);
        assert_eq!(json["bancas"]["realCariri"]["settings"]["commissionPeriod"], 40.0);
        assert_eq!(json["savedDays"]["realCariri"][0]["id"], "2025-04-02");
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let repo = FileLedgerRepository::new(Some(dir.path().to_path_buf())).unwrap();
        fs::write(repo.path(), "{ nope").unwrap();
        assert!(repo.load().is_err());
    }
}
