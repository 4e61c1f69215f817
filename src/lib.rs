#![allow(clippy::module_inception)]

use crate::errors::errors::{ErrorTip, Report};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

pub use config::ScannerOptions;
pub use errors::errors::{Error, ErrorImpl, Warning, WarningImpl};
pub use lexer::scanner::{tokenize, tokenize_with_warnings, Scanner};
pub use lexer::tokens::{Literal, Token, TokenType};

/// Where a diagnostic starts: 1-based line and byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, offset: usize) -> Self {
        Position { line, offset }
    }
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line text (including its line
/// break, if any) and the byte offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) || (position == end && !line.ends_with('\n')) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // Directly after a trailing line break, or an empty source.
    Some((line_number, String::new(), 0))
}

/// Renders `report` as a caret-annotated snippet of `source`.
///
/// ```text
/// Error: LoneAt (`@` must be doubled (`@@`) to mark an exemption rule)
///   |
/// 2 | @x
///   | ^
/// ```
pub fn render_diagnostic(source: &str, report: &dyn Report) -> String {
    let position = report.get_position();
    let mut out = String::new();

    if let ErrorTip::None = report.get_tip() {
        out.push_str(&format!("{}: {}\n", report.get_severity(), report.get_error_name()));
    } else {
        out.push_str(&format!(
            "{}: {} ({})\n",
            report.get_severity(),
            report.get_error_name(),
            report.get_tip()
        ));
    }

    let Some((_, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        out.push_str(&format!("line {}\n", position.line));
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
