//! CSV output for classification results.

use super::terminal::format_field;
use crate::models::{Classification, SubnetReport};

pub const CSV_HEADER: &str =
    r#"               "address", "octet", "block_start", "block_end", "verdict""#;

/// Build all CSV lines, header first.
pub fn csv_lines(report: &SubnetReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.results.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(report.results.iter().map(|c| csv_row(c, report)));
    lines
}

fn csv_row(c: &Classification, report: &SubnetReport) -> String {
    format!(
        r#"{address},{octet},{start},{end},{verdict}"#,
        address = format_field(&c.address, 24),
        octet = format_field(c.octet_value, 8),
        start = format_field(report.reference.start, 14),
        end = format_field(report.reference.end, 12),
        verdict = format_field(c.verdict, 10),
    )
}

/// Print the report as CSV to stdout.
pub fn print_csv(report: &SubnetReport) {
    log::info!("#Start print_csv() {} row(s)", report.results.len());
    for line in csv_lines(report) {
        println!("{line}");
    }
    if !report.rejected.is_empty() {
        log::warn!(
            "{} malformed initiator address(es) left out of the CSV",
            report.rejected.len()
        );
    }
}
