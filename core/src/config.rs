use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Result};

use crate::model::{BancaId, Percent, Settings};

const CONFIG_FILE_NAME: &str = "config.json";
const DATA_DIR_NAME: &str = ".descarga";
pub const DATA_DIR_ENV: &str = "DESCARGA_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BancaConfig {
    pub id: BancaId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_commission_period: Percent,
    pub default_commission_group: Percent,
    pub bancas: Vec<BancaConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_commission_period: Percent::new(40.0),
            default_commission_group: Percent::new(30.0),
            bancas: vec![
                BancaConfig {
                    id: BancaId::from("realCariri"),
                    name: "Real Cariri".into(),
                },
                BancaConfig {
                    id: BancaId::from("bancaUniao"),
                    name: "Banca União".into(),
                },
            ],
        }
    }
}

impl Config {
    /// Settings a banca starts with before the user changes anything.
    pub fn default_settings(&self, banca: &BancaConfig) -> Settings {
        Settings::new(
            banca.name.clone(),
            self.default_commission_period,
            self.default_commission_group,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.bancas.is_empty() {
            return Err(anyhow!("Config must list at least one banca"));
        }
        for banca in &self.bancas {
            self.default_settings(banca).validate()?;
        }
        Ok(())
    }
}

/// Picks the data directory: explicit path, then `$DESCARGA_HOME`, then `~/.descarga`.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CONFIG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|e| anyhow!("Invalid config {}: {}", self.path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::new(dir.path()).load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bancas.len(), 2);
        assert_eq!(config.default_settings(&config.bancas[1]).banca_name, "Banca União");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(dir.path());
        let mut config = Config::default();
        config.default_commission_group = Percent::new(25.0);
        config.bancas.push(BancaConfig {
            id: BancaId::from("centro"),
            name: "Banca Centro".into(),
        });

        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"defaultCommissionPeriod": 35}"#).unwrap();

        let config = ConfigManager::new(dir.path()).load().unwrap();
        assert_eq!(config.default_commission_period, Percent::new(35.0));
        assert_eq!(config.default_commission_group, Percent::new(30.0));
        assert_eq!(config.bancas, Config::default().bancas);
    }

    #[test]
    fn test_rejects_out_of_range_default_rate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"defaultCommissionGroup": 130}"#).unwrap();
        assert!(ConfigManager::new(dir.path()).load().is_err());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/descarga-explicit");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
