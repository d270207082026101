//! Terminal output.
//!
//! One coloured line per initiator, framed by the reference block and a summary.

use crate::models::{BlockRange, Classification, SubnetReport, Verdict};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Describe the local block the initiators are checked against.
pub fn reference_line(report: &SubnetReport) -> String {
    let octet = &report.significant_octet;
    format!(
        "SVIP {svip} netmask {netmask}: octet[{position}] block size {size}, local block {reference}{degenerate}",
        svip = report.svip,
        netmask = report.netmask,
        position = octet.position,
        size = octet.block_size,
        reference = report.reference,
        degenerate = if octet.degenerate { " (degenerate mask)" } else { "" },
    )
}

/// One initiator's verdict, e.g. `Pass: 10.10.22.99:3260 octet[2]=22 in local block 22-23`.
pub fn verdict_line(c: &Classification, position: usize, reference: BlockRange) -> String {
    let (verdict, relation, suffix) = match c.verdict {
        Verdict::Pass => (c.verdict.to_string().green(), "in", ""),
        Verdict::Fail => (c.verdict.to_string().red(), "outside", " (routed)"),
    };
    format!(
        "{verdict}: {address} octet[{position}]={value} {relation} local block {reference}{suffix}",
        address = c.address,
        value = c.octet_value,
    )
}

pub fn summary_line(report: &SubnetReport) -> String {
    format!(
        "{local} local, {routed} routed, {rejected} rejected",
        local = report.local_count(),
        routed = report.routed_count(),
        rejected = report.rejected.len()
    )
}

/// Print the report to stdout.
pub fn print_report(report: &SubnetReport) {
    log::info!("#Start print_report() {} initiator(s)", report.results.len());
    println!("{}", reference_line(report));
    for c in &report.results {
        println!(
            "{}",
            verdict_line(c, report.significant_octet.position, report.reference)
        );
    }
    for e in &report.rejected {
        println!("{}: {e}", "Skipped".yellow());
    }
    println!("{}", summary_line(report));
}
