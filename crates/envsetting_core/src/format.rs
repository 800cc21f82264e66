//! Missing-variable message format.
//!
//! The message is a block on its own lines, every line indented by [`INDENT_WIDTH`] spaces:
//!
//! ```text
//!
//!     Missing required environment variable: DATABASE_URL
//!     Postgres connection string.
//!       Format: postgres://user@host/db
//! ```
//!
//! A description keeps its relative indentation: its minimum common indent is removed first, then the whole block
//! is re-indented to line up with the header.

/// Indentation applied to every line of the message block.
pub const INDENT_WIDTH: usize = 4;

/// Header preceding the variable name.
pub const MISSING_REQUIRED_HEADER: &str = "Missing required environment variable: ";

/// Format the error message for a required variable with no value and no default.
///
/// ## Parameters
/// - `name`: the variable name, as declared.
/// - `description`: optional human-readable description; blank descriptions are ignored.
///
/// ## Returns
/// - The message block, starting with a newline and ending with a newline.
///
/// ## Examples
/// ```rust
/// use envsetting_core::format::missing_required_message;
///
/// let msg = missing_required_message("PORT", Some("  Port to listen on"));
/// assert_eq!(msg, "\n    Missing required environment variable: PORT\n    Port to listen on\n");
/// ```
pub fn missing_required_message(name: &str, description: Option<&str>) -> String {
    let mut body = format!("{MISSING_REQUIRED_HEADER}{name}");
    if let Some(description) = description.map(trim_blank_lines).filter(|d| !d.is_empty()) {
        body.push('\n');
        body.push_str(&unindent(&description));
    }
    format!("\n{}\n", indent(INDENT_WIDTH, &body))
}

/// Remove the minimum common leading-space indent from every line.
///
/// Whitespace-only lines do not take part in the minimum and come out empty.
pub fn unindent(text: &str) -> String {
    let width = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_spaces)
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| if line.trim().is_empty() { "" } else { &line[width..] })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every non-empty line with `width` spaces.
pub fn indent(width: usize, text: &str) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{pad}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

// Drops whitespace-only lines at both ends, keeping interior lines intact.
fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
