//! Terminal rendering for generated test cases.

use casegen_common::{TestCase, TestCaseReport};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Render the structured view of a report.
pub fn format_report(report: &TestCaseReport) -> String {
    if report.is_empty() {
        return format!("{}\n", "No test cases found in the response.".yellow());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("Generated {} test cases:", report.count())
            .bright_green()
            .bold()
    );

    for (i, case) in report.cases.iter().enumerate() {
        let _ = writeln!(out);
        format_case(&mut out, i + 1, case);
    }

    out
}

fn format_case(out: &mut String, number: usize, case: &TestCase) {
    let _ = writeln!(
        out,
        "{}  {}",
        format!("Test Case {}:", number).bright_cyan().bold(),
        case.title.bright_white().bold()
    );
    let _ = writeln!(
        out,
        "   {}  {}",
        "Preconditions:".bright_magenta(),
        case.preconditions
    );

    if !case.steps.is_empty() {
        let _ = writeln!(out, "   {}", "Steps:".bright_magenta());
        for (i, step) in case.steps.iter().enumerate() {
            let _ = writeln!(out, "      {}. {}", i + 1, step);
        }
    }

    let _ = writeln!(
        out,
        "   {}  {}",
        "Expected Result:".bright_magenta(),
        case.expected_result
    );
}

/// Render a malformed-response diagnostic plus the untouched raw text.
pub fn format_malformed(reason: &str, raw: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        "Failed to parse JSON response:".red().bold(),
        reason
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Raw response:".dimmed());
    let _ = write!(out, "{}", raw);
    out
}
