use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced by the ledger service and its storage.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown banca: {0}")]
    UnknownBanca(String),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("No saved day for {0}")]
    NoSavedDay(NaiveDate),
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Why an import document was rejected. The ledger is left untouched in every case.
#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("Malformed JSON: {0}")]
    Malformed(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
