use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use anyhow::{anyhow, Result};

use crate::input::expand_key;
use crate::model::column::{normalize_key, Column, ColumnValues};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct LogData {
    pub entradas: ColumnValues,
    pub premios: ColumnValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Entradas,
    Premios,
}

impl LogData {
    pub fn get(&self, column: Column, field: Field) -> f64 {
        match field {
            Field::Entradas => self.entradas[column],
            Field::Premios => self.premios[column],
        }
    }

    pub fn set(&mut self, column: Column, field: Field, value: f64) {
        match field {
            Field::Entradas => self.entradas[column] = value,
            Field::Premios => self.premios[column] = value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Entradas => f.write_str("entradas"),
            Field::Premios => f.write_str("premios"),
        }
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match expand_key(&normalize_key(s), &["entradas", "premios"])?.as_str() {
            "entradas" => Ok(Field::Entradas),
            "premios" => Ok(Field::Premios),
            other => Err(anyhow!("Invalid field '{}'", other)),
        }
    }
}
