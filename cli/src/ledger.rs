use descarga_core::service::{ColumnRow, DayView};
use descarga_core::time::long_date;
use descarga_core::{format_brl, LedgerRepository, LedgerService, RowTotals, SavedDay, Settings};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const WARNING: &str = "Aviso: Negativo";

#[derive(Tabled)]
struct SheetRow {
    #[tabled(rename = "Coluna")]
    column: String,
    #[tabled(rename = "Entradas")]
    entradas: String,
    #[tabled(rename = "Comissão")]
    comissao: String,
    #[tabled(rename = "Prêmios")]
    premios: String,
    #[tabled(rename = "Saldo")]
    saldo: String,
    #[tabled(rename = "")]
    aviso: String,
}

impl SheetRow {
    fn from_row(row: &ColumnRow) -> Self {
        Self {
            column: row.label.clone(),
            entradas: format_brl(row.entradas),
            comissao: format_brl(row.comissao),
            premios: format_brl(row.premios),
            saldo: format_brl(row.saldo),
            aviso: if row.warned_negative { WARNING.to_string() } else { String::new() },
        }
    }

    fn from_totals(label: &str, totals: &RowTotals) -> Self {
        Self {
            column: label.to_string(),
            entradas: format_brl(totals.entradas),
            comissao: format_brl(totals.comissao),
            premios: format_brl(totals.premios),
            saldo: format_brl(totals.saldo_final),
            aviso: String::new(),
        }
    }
}

#[derive(Tabled)]
pub(crate) struct TotalsRow {
    #[tabled(rename = "")]
    pub label: String,
    #[tabled(rename = "Entradas")]
    pub entradas: String,
    #[tabled(rename = "Comissão")]
    pub comissao: String,
    #[tabled(rename = "Prêmios")]
    pub premios: String,
    #[tabled(rename = "Saldo Final")]
    pub saldo_final: String,
}

impl TotalsRow {
    pub(crate) fn new(label: impl Into<String>, totals: &RowTotals) -> Self {
        Self {
            label: label.into(),
            entradas: format_brl(totals.entradas),
            comissao: format_brl(totals.comissao),
            premios: format_brl(totals.premios),
            saldo_final: format_brl(totals.saldo_final),
        }
    }
}

pub(crate) fn styled(rows: impl IntoIterator<Item = impl Tabled>) -> Table {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn print_day(view: &DayView) {
    println!(
        "\x1b[1;36m{}\x1b[0m ({}) - {}",
        view.banca_name,
        view.banca,
        long_date(view.date)
    );
    println!(
        "Comissão: Período {} | Grupo {}",
        view.commission_period, view.commission_group
    );

    let mut rows: Vec<SheetRow> = view.rows.iter().map(SheetRow::from_row).collect();
    rows.push(SheetRow::from_totals("Total", &view.totals));
    println!("{}", styled(rows));

    let periods: Vec<TotalsRow> = view
        .periods
        .iter()
        .map(|p| TotalsRow::new(format!("{} + Grupo", p.period.label()), &p.totals))
        .collect();
    println!("{}", styled(periods));

    let warned: Vec<&str> = view.warnings().map(|r| r.label.as_str()).collect();
    if !warned.is_empty() {
        println!("\x1b[1;33m{}\x1b[0m em {}", WARNING, warned.join(", "));
    }
}

pub fn print_settings(settings: &Settings) {
    println!("Banca:             {}", settings.banca_name);
    println!("Comissão Período:  {}", settings.commission_period);
    println!("Comissão Grupo:    {}", settings.commission_group);
}

#[derive(Tabled)]
struct BancaRow {
    #[tabled(rename = "")]
    selected: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Dia")]
    date: String,
    #[tabled(rename = "Dias salvos")]
    saved: usize,
}

pub fn print_bancas<R: LedgerRepository>(service: &LedgerService<R>) {
    let rows: Vec<BancaRow> = service
        .bancas()
        .map(|(id, state)| BancaRow {
            selected: if id == service.selected_banca() { "*".into() } else { String::new() },
            id: id.to_string(),
            name: state.settings.banca_name.clone(),
            date: state.date.format("%d/%m/%Y").to_string(),
            saved: service.store().saved(id).len(),
        })
        .collect();
    println!("{}", styled(rows));
}

pub fn print_saved_days(days: &[SavedDay]) {
    if days.is_empty() {
        println!("Nenhum dia salvo.");
        return;
    }
    let rows: Vec<TotalsRow> = days
        .iter()
        .map(|d| TotalsRow::new(d.date.format("%d/%m/%Y").to_string(), &d.totals))
        .collect();
    println!("{}", styled(rows));
}
