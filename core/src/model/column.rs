use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use anyhow::{anyhow, Result};

use crate::input::expand_key;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Manha,
    Tarde,
    Noite,
    GrupoManha,
    GrupoTarde,
    GrupoNoite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Period,
    Group,
}

impl Column {
    /// Display order.
    pub const ALL: [Column; 6] = [
        Column::Manha,
        Column::Tarde,
        Column::Noite,
        Column::GrupoManha,
        Column::GrupoTarde,
        Column::GrupoNoite,
    ];

    pub const PERIODS: [Column; 3] = [Column::Manha, Column::Tarde, Column::Noite];
    pub const GROUPS: [Column; 3] = [Column::GrupoManha, Column::GrupoTarde, Column::GrupoNoite];

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Manha | Column::Tarde | Column::Noite => ColumnKind::Period,
            _ => ColumnKind::Group,
        }
    }

    pub fn is_period(self) -> bool {
        self.kind() == ColumnKind::Period
    }

    /// The column on the other side of the period/group pairing.
    pub fn paired(self) -> Column {
        match self {
            Column::Manha => Column::GrupoManha,
            Column::Tarde => Column::GrupoTarde,
            Column::Noite => Column::GrupoNoite,
            Column::GrupoManha => Column::Manha,
            Column::GrupoTarde => Column::Tarde,
            Column::GrupoNoite => Column::Noite,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Column::Manha => "manha",
            Column::Tarde => "tarde",
            Column::Noite => "noite",
            Column::GrupoManha => "grupoManha",
            Column::GrupoTarde => "grupoTarde",
            Column::GrupoNoite => "grupoNoite",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Manha => "Manhã",
            Column::Tarde => "Tarde",
            Column::Noite => "Noite",
            Column::GrupoManha => "Grupo Manhã",
            Column::GrupoTarde => "Grupo Tarde",
            Column::GrupoNoite => "Grupo Noite",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Short aliases tried before prefix expansion ("g" alone would be ambiguous).
const COLUMN_ALIASES: [(&str, Column); 6] = [
    ("m", Column::Manha),
    ("t", Column::Tarde),
    ("n", Column::Noite),
    ("gm", Column::GrupoManha),
    ("gt", Column::GrupoTarde),
    ("gn", Column::GrupoNoite),
];

impl FromStr for Column {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        if let Some((_, column)) = COLUMN_ALIASES.iter().find(|(alias, _)| *alias == key) {
            return Ok(*column);
        }

        let candidates: Vec<String> = Column::ALL.iter().map(|c| c.key().to_lowercase()).collect();
        let candidate_refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let expanded = expand_key(&key, &candidate_refs)
            .map_err(|e| anyhow!("Invalid column '{}': {}", s, e))?;

        Column::ALL
            .into_iter()
            .find(|c| c.key().to_lowercase() == expanded)
            .ok_or_else(|| anyhow!("Invalid column '{}'", s))
    }
}

/// Lowercases and strips the accents and separators users type for column and field names.
pub(crate) fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| match c {
            'ã' | 'á' | 'â' => 'a',
            'ê' | 'é' => 'e',
            _ => c,
        })
        .collect()
}

/// One value per column. Every column is always present; absent keys
/// deserialize as zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnValues {
    pub manha: f64,
    pub tarde: f64,
    pub noite: f64,
    pub grupo_manha: f64,
    pub grupo_tarde: f64,
    pub grupo_noite: f64,
}

impl ColumnValues {
    pub fn from_fn(mut f: impl FnMut(Column) -> f64) -> Self {
        let mut values = ColumnValues::default();
        for column in Column::ALL {
            values[column] = f(column);
        }
        values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, f64)> + '_ {
        Column::ALL.into_iter().map(move |c| (c, self[c]))
    }
}

impl Index<Column> for ColumnValues {
    type Output = f64;

    fn index(&self, column: Column) -> &f64 {
        match column {
            Column::Manha => &self.manha,
            Column::Tarde => &self.tarde,
            Column::Noite => &self.noite,
            Column::GrupoManha => &self.grupo_manha,
            Column::GrupoTarde => &self.grupo_tarde,
            Column::GrupoNoite => &self.grupo_noite,
        }
    }
}

impl IndexMut<Column> for ColumnValues {
    fn index_mut(&mut self, column: Column) -> &mut f64 {
        match column {
            Column::Manha => &mut self.manha,
            Column::Tarde => &mut self.tarde,
            Column::Noite => &mut self.noite,
            Column::GrupoManha => &mut self.grupo_manha,
            Column::GrupoTarde => &mut self.grupo_tarde,
            Column::GrupoNoite => &mut self.grupo_noite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing() {
        for period in Column::PERIODS {
            assert!(period.is_period());
            assert!(!period.paired().is_period());
            assert_eq!(period.paired().paired(), period);
        }
        assert_eq!(Column::Tarde.paired(), Column::GrupoTarde);
    }

    #[test]
    fn test_parse_column() {
        assert_eq!("manha".parse::<Column>().unwrap(), Column::Manha);
        assert_eq!("Manhã".parse::<Column>().unwrap(), Column::Manha);
        assert_eq!("grupoNoite".parse::<Column>().unwrap(), Column::GrupoNoite);
        assert_eq!("grupo tarde".parse::<Column>().unwrap(), Column::GrupoTarde);
        assert_eq!("gm".parse::<Column>().unwrap(), Column::GrupoManha);
        assert_eq!("grupom".parse::<Column>().unwrap(), Column::GrupoManha);
        assert_eq!("noi".parse::<Column>().unwrap(), Column::Noite);

        // "grupo" matches all three groups
        assert!("grupo".parse::<Column>().is_err());
        assert!("madrugada".parse::<Column>().is_err());
    }

    #[test]
    fn test_partial_values_default_to_zero() {
        let values: ColumnValues = serde_json::from_str(r#"{"manha": 12.5, "grupoNoite": 3}"#).unwrap();
        assert_eq!(values[Column::Manha], 12.5);
        assert_eq!(values[Column::GrupoNoite], 3.0);
        assert_eq!(values[Column::Tarde], 0.0);
        assert_eq!(values.iter().count(), 6);
    }

    #[test]
    fn test_serialized_keys() {
        let values = ColumnValues::from_fn(|c| if c == Column::GrupoManha { 1.0 } else { 0.0 });
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["grupoManha"], 1.0);
        assert_eq!(serde_json::to_value(Column::GrupoTarde).unwrap(), "grupoTarde");
    }
}
