pub mod report;

#[cfg(test)]
mod report_test;

pub use report::{render_text, report_file_name, Report, ReportKind, ReportPeriod, ReportUseCase};
