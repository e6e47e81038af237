//! Plain-text layout primitives
//!
//! Tables with aligned columns and a row limit, and label/value card grids.
//! All output is returned as `String`; printing is the caller's business.

use std::fmt::Write as _;

/// Column-aligned text table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { headers: headers.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Append a row; missing cells render empty, extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render at most `limit` rows; an empty table renders `empty_message`.
    pub fn render(&self, limit: usize, empty_message: &str) -> String {
        if self.rows.is_empty() {
            return format!("{empty_message}\n");
        }

        let shown = &self.rows[..self.rows.len().min(limit)];
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| {
                shown
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(self.headers[col].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in shown {
            push_line(&mut out, row, &widths);
        }

        let hidden = self.rows.len() - shown.len();
        if hidden > 0 {
            let _ = writeln!(out, "... and {hidden} more");
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

/// A `label: value` card grid, one card per line
pub fn cards(items: &[(&str, String)]) -> String {
    let width = items.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in items {
        let pad = width - label.chars().count();
        let _ = writeln!(out, "[ {label}{} : {value} ]", " ".repeat(pad));
    }
    out
}

/// Page heading with an underline
pub fn heading(title: &str) -> String {
    format!("{title}\n{}\n", "=".repeat(title.chars().count()))
}

/// Two decimals with thousands separators, e.g. `1,234,567.50`.
pub fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{grouped}.{fraction}", if negative { "-" } else { "" })
}

/// Cell text for an optional field.
pub fn opt(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}
