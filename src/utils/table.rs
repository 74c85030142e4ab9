//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

pub struct Column {
    pub header: String,
    /// Minimum width; grows to fit the widest cell.
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.chars().count(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(headers.iter().map(|h| Column::new(h)).collect())
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .max()
                    .unwrap_or(0)
                    .max(col.width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("{:<width$} ", col.header, width = w));
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows; padding is computed on the visible text so colors don't skew it
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = w.saturating_sub(visible_width(cell));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 1));
            }
            out.push('\n');
        }

        out
    }
}
