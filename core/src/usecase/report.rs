use crate::engine::aggregate_totals;
use crate::model::{RowTotals, SavedDay};
use crate::money::format_brl;
use crate::time::{month_key, month_label, parse_month_key, parse_week_key, week_key, week_label};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Weekly,
    Monthly,
}

impl ReportKind {
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Weekly => "semanal",
            ReportKind::Monthly => "mensal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Weekly => "Semanal",
            ReportKind::Monthly => "Mensal",
        }
    }
}

/// An ISO week or a calendar month.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportPeriod {
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl ReportPeriod {
    pub fn containing(kind: ReportKind, date: NaiveDate) -> Self {
        match kind {
            ReportKind::Weekly => {
                let (year, week) = week_key(date);
                ReportPeriod::Week { year, week }
            }
            ReportKind::Monthly => {
                let (year, month) = month_key(date);
                ReportPeriod::Month { year, month }
            }
        }
    }

    /// Parses `2025-W03` for weeks or `2025-03` for months.
    pub fn parse(kind: ReportKind, key: &str) -> Result<Self> {
        Ok(match kind {
            ReportKind::Weekly => {
                let (year, week) = parse_week_key(key)?;
                ReportPeriod::Week { year, week }
            }
            ReportKind::Monthly => {
                let (year, month) = parse_month_key(key)?;
                ReportPeriod::Month { year, month }
            }
        })
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            ReportPeriod::Week { .. } => ReportKind::Weekly,
            ReportPeriod::Month { .. } => ReportKind::Monthly,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        *self == ReportPeriod::containing(self.kind(), date)
    }

    pub fn key(&self) -> String {
        match self {
            ReportPeriod::Week { year, week } => format!("{}-W{:02}", year, week),
            ReportPeriod::Month { year, month } => format!("{}-{:02}", year, month),
        }
    }

    pub fn label(&self) -> String {
        match *self {
            ReportPeriod::Week { year, week } => week_label(year, week),
            ReportPeriod::Month { year, month } => month_label(year, month),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub period: ReportPeriod,
    pub label: String,
    /// Ascending by date.
    pub days: Vec<SavedDay>,
    pub totals: RowTotals,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Weekly and monthly reports over a banca's archive.
pub struct ReportUseCase<'a> {
    days: &'a [SavedDay],
}

impl<'a> ReportUseCase<'a> {
    pub fn new(days: &'a [SavedDay]) -> Self {
        Self { days }
    }

    /// Periods that have at least one saved day, newest first.
    pub fn periods(&self, kind: ReportKind) -> Vec<ReportPeriod> {
        let mut periods: Vec<ReportPeriod> = self
            .days
            .iter()
            .map(|d| ReportPeriod::containing(kind, d.date))
            .collect();
        periods.sort_by(|a, b| b.cmp(a));
        periods.dedup();
        periods
    }

    /// Saved days inside `period` and the sum of their stored totals.
    pub fn report(&self, period: ReportPeriod) -> Report {
        let mut days: Vec<SavedDay> = self
            .days
            .iter()
            .filter(|d| period.contains(d.date))
            .cloned()
            .collect();
        days.sort_by_key(|d| d.date);

        Report {
            period,
            label: period.label(),
            totals: aggregate_totals(&days),
            days,
        }
    }

    pub fn reports(&self, kind: ReportKind) -> Vec<Report> {
        self.periods(kind).into_iter().map(|p| self.report(p)).collect()
    }

    pub fn weekly_groups(&self) -> Vec<Report> {
        self.reports(ReportKind::Weekly)
    }

    pub fn monthly_groups(&self) -> Vec<Report> {
        self.reports(ReportKind::Monthly)
    }

    pub fn week_report(&self, year: i32, week: u32) -> Report {
        self.report(ReportPeriod::Week { year, week })
    }

    pub fn month_report(&self, year: i32, month: u32) -> Report {
        self.report(ReportPeriod::Month { year, month })
    }

    /// Report for the most recent period with data.
    pub fn latest(&self, kind: ReportKind) -> Option<Report> {
        self.periods(kind).first().map(|p| self.report(*p))
    }
}

/// `relatorio_semanal_Real_Cariri_2025-W02.txt`. Anything in the banca name
/// other than letters and digits becomes `_`, so the name stays one path component.
pub fn report_file_name(report: &Report, banca_name: &str) -> String {
    let banca: String = banca_name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!(
        "relatorio_{}_{}_{}.txt",
        report.period.kind().name(),
        banca,
        report.period.key()
    )
}

/// Plain-text rendering used for report files.
pub fn render_text(report: &Report, banca_name: &str, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Relatório {} - {}\n{}\n\n",
        report.period.kind().title(),
        banca_name,
        report.label
    ));

    out.push_str(&format!(
        "{:<12}{:>18}{:>18}{:>18}{:>18}\n",
        "Data", "Entradas", "Comissão", "Prêmios", "Saldo Final"
    ));
    for day in &report.days {
        out.push_str(&format_line(&day.date.format("%d/%m/%Y").to_string(), &day.totals));
    }
    if report.days.is_empty() {
        out.push_str("Nenhum dia salvo neste período.\n");
    }
    out.push_str(&format!("{}\n", "-".repeat(84)));
    out.push_str(&format_line("Total", &report.totals));

    out.push_str(&format!(
        "\nExportado em: {}\n",
        generated_at.format("%d/%m/%Y às %H:%M:%S")
    ));
    out
}

fn format_line(first: &str, totals: &RowTotals) -> String {
    format!(
        "{:<12}{:>18}{:>18}{:>18}{:>18}\n",
        first,
        format_brl(totals.entradas),
        format_brl(totals.comissao),
        format_brl(totals.premios),
        format_brl(totals.saldo_final)
    )
}
