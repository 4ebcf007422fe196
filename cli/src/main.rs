mod ledger;
mod report;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use descarga_core::usecase::{render_text, report_file_name};
use descarga_core::{
    format_brl, init_tracing, parse_cell_edit, parse_day, parse_settings_patch, resolve_data_dir, ConfigManager,
    FileLedgerRepository, LedgerService, ReportKind, ReportPeriod, ReportUseCase,
};

#[derive(Parser)]
#[command(name = "descarga")]
#[command(about = "Daily ledger of entradas, prêmios and commissions per banca", long_about = None)]
struct Cli {
    /// Directory holding state.json and config.json (default: $DESCARGA_HOME or ~/.descarga)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the current day sheet
    Show {
        /// Print the day as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Edit cells (usage: set grupo manha e:150,50 p:20)
    Set {
        /// Column name followed by entradas:/premios: values
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Update settings (usage: settings name:"Real Cariri" period:40 group:30)
    Settings {
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Start a new day with empty entries, keeping the settings
    NewDay {
        /// today, yesterday, +1d, 2025-03-14 or 14/03/2025
        date: Option<String>,
    },
    /// Save the current day into the archive
    Save,
    /// Switch to another banca
    Select { banca: String },
    /// List bancas
    Bancas,
    /// List saved days of the selected banca
    Days,
    /// Delete a saved day
    Delete { date: String },
    /// Export the current day as JSON (stdout when no file is given)
    Export { file: Option<PathBuf> },
    /// Replace the current day with an exported JSON file
    Import { file: PathBuf },
    /// Weekly or monthly report of saved days
    Report {
        #[arg(value_enum)]
        kind: ReportArg,
        /// 2025-W03 for weeks, 2025-03 for months (default: latest with data)
        key: Option<String>,
        /// List every period instead of a single one
        #[arg(long, conflicts_with = "key")]
        all: bool,
        /// Write the report to a text file; a directory gets the default file name
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
    /// Browse reports in the terminal UI
    Tui,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportArg {
    #[value(alias = "semana", alias = "weekly")]
    Week,
    #[value(alias = "mes", alias = "monthly")]
    Month,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Week => ReportKind::Weekly,
            ReportArg::Month => ReportKind::Monthly,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config_manager = ConfigManager::new(&data_dir);
    let config = config_manager.load()?;
    let repo = FileLedgerRepository::new(Some(data_dir.clone()))?;
    let today = Local::now().date_naive();
    let mut service = LedgerService::load(repo, &config, today)?;

    match cli.command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json } => {
            let view = service.view()?;
            if json {
                println!("{}", serde_json_pretty(&view)?);
            } else {
                ledger::print_day(&view);
            }
        }
        Commands::Set { args } => {
            let edit = parse_cell_edit(&args)?;
            service.update_cells(edit.column, &edit.values)?;
            ledger::print_day(&service.view()?);
        }
        Commands::Settings { args } => {
            let patch = parse_settings_patch(&args)?;
            if !patch.is_empty() {
                service.update_settings(patch)?;
                println!("Configurações atualizadas.");
            }
            ledger::print_settings(&service.current()?.settings);
        }
        Commands::NewDay { date } => {
            let date = match date {
                Some(d) => parse_day(&d, today)?,
                None => today,
            };
            service.new_day(date)?;
            println!("Novo dia iniciado: {}", date.format("%d/%m/%Y"));
        }
        Commands::Save => {
            let saved = service.save_day()?;
            println!(
                "Dia {} salvo. Saldo final: {}",
                saved.date.format("%d/%m/%Y"),
                format_brl(saved.totals.saldo_final)
            );
        }
        Commands::Select { banca } => {
            service.select_banca(&banca)?;
            println!("Banca selecionada: {} ({})", service.current()?.settings.banca_name, banca);
        }
        Commands::Bancas => {
            ledger::print_bancas(&service);
        }
        Commands::Days => {
            ledger::print_saved_days(service.saved_days());
        }
        Commands::Delete { date } => {
            let date = parse_day(&date, today)?;
            service.delete_saved_day(date)?;
            println!("Dia {} removido.", date.format("%d/%m/%Y"));
        }
        Commands::Export { file } => {
            let json = service.export_json()?;
            match file {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("Could not write {}", path.display()))?;
                    println!("Exportado para {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::Import { file } => {
            let text = fs::read_to_string(&file).with_context(|| format!("Could not read {}", file.display()))?;
            service.import_json(&text)?;
            println!("Dados importados de {}", file.display());
            ledger::print_day(&service.view()?);
        }
        Commands::Report { kind, key, all, output } => {
            let kind = ReportKind::from(kind);
            let banca_name = service.current()?.settings.banca_name.clone();
            let usecase = ReportUseCase::new(service.saved_days());

            if all {
                report::print_reports(&usecase.reports(kind));
                return Ok(());
            }

            let report = match key {
                Some(k) => usecase.report(ReportPeriod::parse(kind, &k)?),
                None => usecase.report(
                    usecase
                        .periods(kind)
                        .first()
                        .copied()
                        .unwrap_or_else(|| ReportPeriod::containing(kind, today)),
                ),
            };

            match output {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(report_file_name(&report, &banca_name))
                    } else {
                        path
                    };
                    let text = render_text(&report, &banca_name, Local::now().naive_local());
                    fs::write(&path, text).with_context(|| format!("Could not write {}", path.display()))?;
                    println!("Relatório salvo em {}", path.display());
                }
                None => report::print_report(&report, &banca_name),
            }
        }
        Commands::Config { init } => {
            if init && !config_manager.path().exists() {
                config_manager.save(&config)?;
                println!("Configuração criada em {}", config_manager.path().display());
            }
            println!("Dados: {}", data_dir.display());
            println!("{}", serde_json_pretty(&config)?);
        }
        Commands::Tui => {
            let banca_name = service.current()?.settings.banca_name.clone();
            tui::run(service.saved_days(), &banca_name)?;
        }
    }
    Ok(())
}

fn serde_json_pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
