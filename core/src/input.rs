//! Parsing of `set` and `settings` command arguments.

use anyhow::{anyhow, Result};

use crate::model::{Column, Field, Percent, SettingsPatch};
use crate::money::parse_brl;

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    /// Free words joined with spaces.
    pub name: String,
    /// `key:value` pairs in the order given.
    pub pairs: Vec<(String, String)>,
}

/// Splits `grupo manha e:100 p:10` into the free words and the `key:value` pairs.
/// Only the first `:` separates, so values may contain more.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut words = Vec::new();
    let mut pairs = Vec::new();

    for arg in args {
        match arg.split_once(':') {
            Some((key, value)) if !key.is_empty() => pairs.push((key.to_string(), value.to_string())),
            _ => words.push(arg.as_str()),
        }
    }

    ParsedInput {
        name: words.join(" "),
        pairs,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// One column and the values to write into it.
#[derive(Debug, PartialEq)]
pub struct CellEdit {
    pub column: Column,
    pub values: Vec<(Field, f64)>,
}

/// Parses `set` arguments. Every value is checked and each field may be
/// given once, so a failed parse writes nothing.
pub fn parse_cell_edit(args: &[String]) -> Result<CellEdit> {
    let parsed = parse_args(args);
    if parsed.name.is_empty() {
        return Err(anyhow!("Column is required (manha, tarde, noite, grupo manha, ...)"));
    }
    let column: Column = parsed.name.parse()?;
    if parsed.pairs.is_empty() {
        return Err(anyhow!("Nothing to set, use e:<valor> and/or p:<valor>"));
    }

    let mut values: Vec<(Field, f64)> = Vec::new();
    for (key, value) in &parsed.pairs {
        let field: Field = key.parse()?;
        if values.iter().any(|(f, _)| *f == field) {
            return Err(anyhow!("{} given more than once", field));
        }
        values.push((field, parse_brl(value)?));
    }

    Ok(CellEdit { column, values })
}

fn parse_percent(value: &str) -> Result<Percent> {
    let number = parse_brl(value.trim().trim_end_matches('%'))
        .map_err(|_| anyhow!("Invalid percentage: '{}'", value))?;
    Ok(Percent::new(number))
}

/// Parses `settings` arguments (`name:`, `period:`, `group:`, prefixes allowed).
/// Range checks are left to [`crate::model::Settings::validate`].
pub fn parse_settings_patch(args: &[String]) -> Result<SettingsPatch> {
    let parsed = parse_args(args);
    if !parsed.name.is_empty() {
        return Err(anyhow!("Unexpected '{}', quote names with spaces: name:\"Banca Centro\"", parsed.name));
    }

    let known_keys = ["name", "period", "group"];
    let mut patch = SettingsPatch::default();
    for (key, value) in parsed.pairs {
        let key = expand_key(&key, &known_keys)?;
        let duplicate = match key.as_str() {
            "name" => patch.banca_name.replace(value.trim().to_string()).is_some(),
            "period" => patch.commission_period.replace(parse_percent(&value)?).is_some(),
            _ => patch.commission_group.replace(parse_percent(&value)?).is_some(),
        };
        if duplicate {
            return Err(anyhow!("{} given more than once", key));
        }
    }
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_args_keeps_order() {
        let parsed = parse_args(&args(&["grupo", "manha", "p:20", "e:150,50"]));
        assert_eq!(parsed.name, "grupo manha");
        assert_eq!(
            parsed.pairs,
            vec![("p".to_string(), "20".to_string()), ("e".to_string(), "150,50".to_string())]
        );
    }

    #[test]
    fn test_value_with_colon_keeps_remainder() {
        let parsed = parse_args(&args(&["name:Banca: Centro", ":x"]));
        assert_eq!(parsed.pairs, vec![("name".to_string(), "Banca: Centro".to_string())]);
        assert_eq!(parsed.name, ":x");
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["name", "period", "group", "premios"];

        assert_eq!(expand_key("n", &candidates).unwrap(), "name");
        assert_eq!(expand_key("per", &candidates).unwrap(), "period");
        assert_eq!(expand_key("group", &candidates).unwrap(), "group");
        assert_eq!(expand_key("pr", &candidates).unwrap(), "premios");

        // Ambiguous
        assert!(expand_key("p", &candidates).is_err()); // matches period, premios

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
    }

    #[test]
    fn test_parse_cell_edit() {
        let edit = parse_cell_edit(&args(&["grupo", "manha", "e:1.234,50", "premios:-20"])).unwrap();
        assert_eq!(edit.column, Column::GrupoManha);
        assert_eq!(edit.values, vec![(Field::Entradas, 1234.5), (Field::Premios, -20.0)]);
    }

    #[test]
    fn test_cell_edit_rejects_same_field_twice() {
        assert!(parse_cell_edit(&args(&["manha", "e:1", "entradas:2"])).is_err());
        assert!(parse_cell_edit(&args(&["manha", "p:1", "p:2"])).is_err());
    }

    #[test]
    fn test_cell_edit_rejects_bad_input() {
        assert!(parse_cell_edit(&args(&["e:10"])).is_err());
        assert!(parse_cell_edit(&args(&["manha"])).is_err());
        assert!(parse_cell_edit(&args(&["madrugada", "e:10"])).is_err());
        assert!(parse_cell_edit(&args(&["tarde", "e:dez"])).is_err());
        assert!(parse_cell_edit(&args(&["tarde", "x:10"])).is_err());
    }

    #[test]
    fn test_parse_settings_patch() {
        let patch = parse_settings_patch(&args(&["n:Banca Centro", "period:37,5%"])).unwrap();
        assert_eq!(patch.banca_name.as_deref(), Some("Banca Centro"));
        assert_eq!(patch.commission_period, Some(Percent::new(37.5)));
        assert_eq!(patch.commission_group, None);

        assert!(parse_settings_patch(&[]).unwrap().is_empty());
        assert!(parse_settings_patch(&args(&["group:30", "g:40"])).is_err());
        assert!(parse_settings_patch(&args(&["name:Banca", "Centro"])).is_err());
        assert!(parse_settings_patch(&args(&["period:quarenta"])).is_err());
    }
}
