pub mod dto;
pub mod ledger_service;

pub use dto::{ColumnRow, DayView};
pub use ledger_service::LedgerService;
