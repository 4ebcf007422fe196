//! Brazilian real formatting (`R$ 1.234,56`) and parsing of typed amounts.

use anyhow::{anyhow, Result};

pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}R$ {},{:02}", sign, group_thousands(abs / 100), abs % 100)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(".")
}

/// Parses an amount typed by the user.
///
/// Accepts `R$ 1.234,56`, `1234,56` and `1234.56`. When a comma is present
/// it is the decimal separator and dots are thousands separators; otherwise
/// a dot is the decimal separator.
pub fn parse_brl(input: &str) -> Result<f64> {
    let mut s: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let negative = s.starts_with('-');
    if negative {
        s.remove(0);
    }
    let s = s.strip_prefix("R$").unwrap_or(&s);
    if s.is_empty() {
        return Err(anyhow!("Empty amount"));
    }

    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| anyhow!("Invalid amount: '{}'", input))?;
    if !value.is_finite() {
        return Err(anyhow!("Invalid amount: '{}'", input));
    }
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(40.0), "R$ 40,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1_000_000.01), "R$ 1.000.000,01");
        assert_eq!(format_brl(-50.25), "-R$ 50,25");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("R$ 1.234,56").unwrap(), 1234.56);
        assert_eq!(parse_brl("150,5").unwrap(), 150.5);
        assert_eq!(parse_brl("150.5").unwrap(), 150.5);
        assert_eq!(parse_brl("  100 ").unwrap(), 100.0);
        assert_eq!(parse_brl("-R$ 3,00").unwrap(), -3.0);
        assert_eq!(parse_brl("R$\u{a0}12,00").unwrap(), 12.0);

        assert!(parse_brl("").is_err());
        assert!(parse_brl("R$").is_err());
        assert!(parse_brl("abc").is_err());
        assert!(parse_brl("inf").is_err());
    }
}
