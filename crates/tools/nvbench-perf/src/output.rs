//! Terminal and JSON output for comparison results.

use serde::Serialize;

use crate::matcher::ComparisonRow;

/// Column headers. `Old` is the reference run, `New` the comparison run.
///
/// The delta column is computed as `New - Old` despite its label; the label
/// is kept as-is for compatibility with existing report consumers.
pub const HEADERS: [&str; 7] = [
    "Name",
    "Parameters",
    "Old - New",
    "New Time",
    "Old Time",
    "New Std",
    "Old Std",
];

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Numbers right, text left. The noise columns are text.
const ALIGN: [Align; 7] = [
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Left,
    Align::Left,
];

/// Extra width every column gets beyond its header.
const HEADER_PADDING: usize = 2;

/// Gap between adjacent columns.
const SEPARATOR: &str = "  ";

fn format_time(value: f64) -> String {
    format!("{value:.12}")
}

fn format_noise(value: f64) -> String {
    format!("{value:.6}%")
}

/// Cell text for one row, in header order.
fn cells(row: &ComparisonRow) -> [String; 7] {
    [
        row.name.clone(),
        row.parameters.clone(),
        format_time(row.delta()),
        format_time(row.compare_time),
        format_time(row.reference_time),
        format_noise(row.compare_noise),
        format_noise(row.reference_noise),
    ]
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

fn render_line(cells: &[String; 7], widths: &[usize; 7], aligns: [Align; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), align)| pad(cell, width, align))
        .collect();
    padded.join(SEPARATOR)
}

/// Render rows as an aligned plain-text table.
///
/// The header line and its dashed rule are always present; each row adds
/// one line. Every cell is padded to its column width, trailing padding
/// included. Without rows no column has numbers in it, so every header is
/// left-aligned. The result ends with a newline.
pub fn render_table(rows: &[ComparisonRow]) -> String {
    let body: Vec<[String; 7]> = rows.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count() + HEADER_PADDING);
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let aligns = if body.is_empty() { [Align::Left; 7] } else { ALIGN };
    let header = HEADERS.map(String::from);
    let rule = widths.map(|w| "-".repeat(w));

    let mut out = String::new();
    for line in [&header, &rule].into_iter().chain(&body) {
        out.push_str(&render_line(line, &widths, aligns));
        out.push('\n');
    }
    out
}

/// Print rows as a formatted table on standard output.
pub fn print_table(rows: &[ComparisonRow]) {
    print!("{}", render_table(rows));
}

/// JSON shape of one row; field names follow the table columns.
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    name: &'a str,
    parameters: &'a str,
    delta: f64,
    new_time: f64,
    old_time: f64,
    new_std: f64,
    old_std: f64,
}

/// Render rows as a pretty-printed JSON array.
///
/// # Errors
///
/// Fails only if a value cannot be represented in JSON.
pub fn render_json(rows: &[ComparisonRow]) -> serde_json::Result<String> {
    let rows: Vec<JsonRow<'_>> = rows
        .iter()
        .map(|row| JsonRow {
            name: &row.name,
            parameters: &row.parameters,
            delta: row.delta(),
            new_time: row.compare_time,
            old_time: row.reference_time,
            new_std: row.compare_noise,
            old_std: row.reference_noise,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaces(n: usize) -> String {
        " ".repeat(n)
    }

    fn sort_row() -> ComparisonRow {
        ComparisonRow {
            name: "BM_Sort".into(),
            parameters: "one".into(),
            reference_time: 10.0,
            compare_time: 9.0,
            reference_noise: 1.0,
            compare_noise: 0.5,
        }
    }

    #[test]
    fn single_row_table() {
        let table = render_table(&[sort_row()]);
        let lines: Vec<&str> = table.lines().collect();

        let header = format!(
            "Name{}Parameters{}Old - New{}New Time{}Old Time{}New Std{}Old Std{}",
            spaces(5),
            spaces(10),
            spaces(8),
            spaces(9),
            spaces(2),
            spaces(4),
            spaces(2),
        );
        let rule = [7, 12, 15, 14, 15, 9, 9].map(|w| "-".repeat(w)).join("  ");
        let row = format!(
            "BM_Sort  one{}-1.000000000000  9.000000000000  10.000000000000  0.500000%  1.000000%",
            spaces(11),
        );

        assert_eq!(lines, [header.as_str(), rule.as_str(), row.as_str()]);
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        // Each header is padded by two and left-aligned, numbers or not.
        let header = HEADERS.map(|h| format!("{h}  ")).join("  ");
        let rule = [6, 12, 11, 10, 10, 9, 9].map(|w| "-".repeat(w)).join("  ");

        assert_eq!(lines, [header.as_str(), rule.as_str()]);
        assert!(lines[0].starts_with("Name    Parameters    Old - New    New Time"));
        assert!(lines[0].ends_with("Old Std  "));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let mut wide = sort_row();
        wide.name = "BM_Sort_Large".into();
        wide.reference_time = 1234.5;
        wide.compare_time = 1000.25;
        let table = render_table(&[sort_row(), wide]);
        let lines: Vec<&str> = table.lines().collect();

        // Both rows end their old-time column at the same offset.
        let end_of = |line: &str, needle: &str| line.find(needle).unwrap() + needle.len();
        assert_eq!(
            end_of(lines[2], "10.000000000000"),
            end_of(lines[3], "1234.500000000000"),
        );
        assert!(lines[3].starts_with("BM_Sort_Large  one"));
    }

    #[test]
    fn noise_keeps_percent_text() {
        let mut row = sort_row();
        row.compare_noise = 0.123_456_789;
        let table = render_table(&[row]);
        assert!(table.contains("0.123457%"));
    }

    #[test]
    fn json_rows_use_column_names() {
        let json = render_json(&[sort_row()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "BM_Sort");
        assert_eq!(value[0]["parameters"], "one");
        assert_eq!(value[0]["delta"], -1.0);
        assert_eq!(value[0]["new_time"], 9.0);
        assert_eq!(value[0]["old_std"], 1.0);
    }
}
