//! JSON export and import of a single day's ledger.
//!
//! The document has the same shape as the persisted day:
//! `{"date": "...", "log": {"entradas": {...}, "premios": {...}}, "settings": {...}}`.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::ImportError;
use crate::model::{DayState, LogData, Settings};

pub fn export_day(state: &DayState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}

/// Validates and parses an exported document.
///
/// `log` and `settings` must be present, non-empty objects that parse into
/// their types. A document without `date` takes `fallback_date`.
pub fn import_day(text: &str, fallback_date: NaiveDate) -> Result<DayState, ImportError> {
    let document: Value = serde_json::from_str(text).map_err(|e| ImportError::Malformed(e.to_string()))?;
    let document = document
        .as_object()
        .ok_or_else(|| ImportError::InvalidFormat("document is not an object".to_string()))?;

    let log = required_object(document, "log")?;
    let settings = required_object(document, "settings")?;

    let log: LogData = serde_json::from_value(Value::Object(log.clone()))
        .map_err(|e| ImportError::InvalidFormat(format!("log: {}", e)))?;
    let settings: Settings = serde_json::from_value(Value::Object(settings.clone()))
        .map_err(|e| ImportError::InvalidFormat(format!("settings: {}", e)))?;

    let date = match document.get("date") {
        None | Some(Value::Null) => fallback_date,
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ImportError::InvalidFormat(format!("date: {}", e)))?,
    };

    Ok(DayState { date, log, settings })
}

fn required_object<'a>(document: &'a Map<String, Value>, field: &str) -> Result<&'a Map<String, Value>, ImportError> {
    match document.get(field) {
        Some(Value::Object(map)) if !map.is_empty() => Ok(map),
        Some(Value::Object(_)) => Err(ImportError::InvalidFormat(format!("`{}` is empty", field))),
        Some(_) => Err(ImportError::InvalidFormat(format!("`{}` is not an object", field))),
        None => Err(ImportError::InvalidFormat(format!("missing `{}`", field))),
    }
}
