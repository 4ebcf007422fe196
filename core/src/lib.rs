pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod money;
pub mod repository;
pub mod service;
pub mod time;
pub mod transfer;
pub mod usecase;

pub use config::{resolve_data_dir, BancaConfig, Config, ConfigManager};
pub use engine::{aggregate_totals, compute_derived, period_totals, Derived};
pub use error::{ImportError, LedgerError};
pub use input::{expand_key, parse_args, parse_cell_edit, parse_settings_patch, CellEdit, ParsedInput};
pub use logging::init_tracing;
pub use model::{
    BancaId, Column, ColumnKind, ColumnValues, DayState, Field, GrandTotals, LedgerStore, LogData, Percent,
    PeriodTotal, RowTotals, SavedDay, Settings, SettingsPatch,
};
pub use money::{format_brl, parse_brl};
pub use repository::{FileLedgerRepository, LedgerRepository};
pub use service::{ColumnRow, DayView, LedgerService};
pub use time::parse_day;
pub use usecase::{Report, ReportKind, ReportPeriod, ReportUseCase};
