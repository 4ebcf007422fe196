pub mod column;
pub mod day;
pub mod log;
pub mod settings;
pub mod store;
pub mod totals;

pub use column::{Column, ColumnKind, ColumnValues};
pub use day::{DayState, SavedDay};
pub use log::{Field, LogData};
pub use settings::{Percent, Settings, SettingsPatch};
pub use store::{BancaId, LedgerStore};
pub use totals::{GrandTotals, PeriodTotal, RowTotals};
