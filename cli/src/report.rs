use descarga_core::Report;

use crate::ledger::{styled, TotalsRow};

pub fn print_report(report: &Report, banca_name: &str) {
    println!(
        "\n\x1b[1;36mRelatório {} - {}\x1b[0m",
        report.period.kind().title(),
        banca_name
    );
    println!("{} ({})", report.label, report.period.key());

    if report.is_empty() {
        println!("Nenhum dia salvo neste período.");
    }

    let mut rows: Vec<TotalsRow> = report
        .days
        .iter()
        .map(|d| TotalsRow::new(d.date.format("%d/%m/%Y (%a)").to_string(), &d.totals))
        .collect();
    rows.push(TotalsRow::new("Total", &report.totals));
    println!("{}", styled(rows));
}

/// One line per period, newest first.
pub fn print_reports(reports: &[Report]) {
    if reports.is_empty() {
        println!("Nenhum dia salvo.");
        return;
    }
    let rows: Vec<TotalsRow> = reports
        .iter()
        .map(|r| TotalsRow::new(format!("{} ({} dias)", r.label, r.days.len()), &r.totals))
        .collect();
    println!("{}", styled(rows));
}
