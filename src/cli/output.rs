//! Styled terminal output helpers shared by every command handler.

use std::collections::HashMap;
use std::fmt;

use colored::Colorize;
use once_cell::sync::Lazy;

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("USD", "$"), ("EUR", "\u{20ac}"), ("GBP", "\u{a3}")])
});

pub fn info(message: impl fmt::Display) {
    println!("INFO: {}", message);
}

pub fn success(message: impl fmt::Display) {
    println!("{}", format!("SUCCESS: {}", message).bright_green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("WARNING: {}", message).bright_yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", format!("ERROR: {}", message).bright_red());
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

/// Renders a fixed-width table with a header separator line.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.len());
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&separator.join("  "));
    out.push('\n');
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

/// Formats an amount in the configured currency, e.g. `-$1,500.00`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);
    match CURRENCY_SYMBOLS.get(currency) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, frac_part),
        None => format!("{}{}.{} {}", sign, grouped, frac_part, currency),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_grouping() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(-1500.0, "USD"), "-$1,500.00");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
    }

    #[test]
    fn falls_back_to_code_suffix_for_unknown_currency() {
        assert_eq!(format_currency(10.0, "CHF"), "10.00 CHF");
    }

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let rendered = render_table(
            &["Name", "Value"],
            &[vec!["Stock A".into(), "1".into()], vec!["B".into(), "42".into()]],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name     Value");
        assert!(lines[1].starts_with("-------"));
        assert_eq!(lines[2], "Stock A  1");
    }
}
