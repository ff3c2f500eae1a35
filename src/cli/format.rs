//! Plain-text rendering helpers for command output.
//!
//! Tables are left-aligned and padded by character count so accented feed types
//! and causes line up.

/// Renders `rows` under `headers` as an aligned text table.
///
/// Returns `empty_message` instead when there are no rows.
#[must_use]
pub fn format_table(headers: &[&str], rows: &[Vec<String>], empty_message: &str) -> String {
    if rows.is_empty() {
        return empty_message.to_string();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = vec![
        render_row(headers.iter().copied(), &widths),
        render_row(rule.iter().map(String::as_str), &widths),
    ];
    lines.extend(
        rows.iter()
            .map(|row| render_row(row.iter().map(String::as_str), &widths)),
    );
    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Formats grams with one decimal, e.g. `"1234.5 g"`.
#[must_use]
pub fn format_grams(value: f64) -> String {
    format!("{value:.1} g")
}

/// Formats kilograms with two decimals, e.g. `"40.00 kg"`.
#[must_use]
pub fn format_kilograms(value: f64) -> String {
    format!("{value:.2} kg")
}

/// Formats a percentage with one decimal, e.g. `"91.0%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_aligns_columns() {
        let rows = vec![
            vec!["2024-01-05".to_string(), "Doença".to_string(), "5".to_string()],
            vec!["2024-01-06".to_string(), "Acidentes".to_string(), "12".to_string()],
        ];
        let table = format_table(&["Date", "Cause", "Deaths"], &rows, "none");
        let expected = "\
Date        Cause      Deaths
----------  ---------  ------
2024-01-05  Doença     5
2024-01-06  Acidentes  12";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&["A"], &[], "No rows."), "No rows.");
    }

    #[test]
    fn test_unit_formatting() {
        assert_eq!(format_grams(1234.56), "1234.6 g");
        assert_eq!(format_kilograms(40.0), "40.00 kg");
        assert_eq!(format_percent(91.0), "91.0%");
    }
}
