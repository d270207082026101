//! Output formatting for classification reports.
//!
//! - [`csv`] - CSV output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

use crate::models::SubnetReport;

pub use csv::{csv_lines, print_csv, CSV_HEADER};
pub use terminal::{format_field, print_report, reference_line, summary_line, verdict_line};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
}

pub fn print(report: &SubnetReport, format: OutputFormat) {
    match format {
        OutputFormat::Terminal => print_report(report),
        OutputFormat::Csv => print_csv(report),
    }
}
