use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use anyhow::{anyhow, Result};

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parses a day relative to `today`.
///
/// Accepts `today`/`hoje`, `yesterday`/`ontem`, `+Nd`/`-Nd`, `YYYY-MM-DD`
/// and `DD/MM/YYYY`.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "hoje" => return Ok(today),
        "yesterday" | "ontem" => return shift_days(today, -1, input),
        "tomorrow" | "amanha" | "amanhã" => return shift_days(today, 1, input),
        _ => {}
    }

    // 2. Relative format (+Nd, -Nd)
    if let Some(rest) = input.strip_suffix('d') {
        if rest.starts_with('+') || rest.starts_with('-') {
            let count: i64 = rest.parse().map_err(|_| anyhow!("Invalid relative day: {}", input))?;
            return shift_days(today, count, input);
        }
    }

    // 3. Fallback to standard formats
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%d/%m/%Y") {
        return Ok(d);
    }

    Err(anyhow!("Could not parse date: {}", input))
}

fn shift_days(today: NaiveDate, count: i64, input: &str) -> Result<NaiveDate> {
    TimeDelta::try_days(count)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| anyhow!("Invalid relative day: {}", input))
}

/// ISO `(year, week)` of a day. Weeks start on Monday.
pub fn week_key(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Monday and Sunday of an ISO week.
pub fn week_bounds(year: i32, week: u32) -> Option<(NaiveDate, NaiveDate)> {
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
    let sunday = monday.checked_add_signed(TimeDelta::days(6))?;
    Some((monday, sunday))
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// `Semana de 06/01 a 12/01/2025`
pub fn week_label(year: i32, week: u32) -> String {
    match week_bounds(year, week) {
        Some((start, end)) => format!("Semana de {} a {}", start.format("%d/%m"), end.format("%d/%m/%Y")),
        None => format!("Semana {} de {}", week, year),
    }
}

/// `março de 2025`
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} de {}", month_name(month).unwrap_or("?"), year)
}

/// Long form used in headers: `14 de março de 2025`.
pub fn long_date(date: NaiveDate) -> String {
    format!("{:02} de {}", date.day(), month_label(date.year(), date.month()))
}

/// Parses `2025-W03` (also `2025-w3`).
pub fn parse_week_key(input: &str) -> Result<(i32, u32)> {
    let (year, week) = input
        .trim()
        .split_once(|c: char| c == 'W' || c == 'w')
        .ok_or_else(|| anyhow!("Invalid week '{}', expected YYYY-Www", input))?;
    let year: i32 = year
        .trim_end_matches('-')
        .parse()
        .map_err(|_| anyhow!("Invalid year in '{}'", input))?;
    let week: u32 = week.parse().map_err(|_| anyhow!("Invalid week number in '{}'", input))?;
    if week_bounds(year, week).is_none() {
        return Err(anyhow!("Week {} does not exist in {}", week, year));
    }
    Ok((year, week))
}

/// Parses `2025-03`.
pub fn parse_month_key(input: &str) -> Result<(i32, u32)> {
    let (year, month) = input
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("Invalid month '{}', expected YYYY-MM", input))?;
    let year: i32 = year.parse().map_err(|_| anyhow!("Invalid year in '{}'", input))?;
    let month: u32 = month.parse().map_err(|_| anyhow!("Invalid month in '{}'", input))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Invalid month in '{}'", input));
    }
    Ok((year, month))
}
