//! Table rendering for CLI output

use super::ColorTheme;
use crate::domain::models::{Plan, Restore};
use crate::infrastructure::constants::{PLAN_LIST_COLUMNS, RESTORE_LIST_COLUMNS};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;

/// Records that can be shown as one row of a list table
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Index of the column holding the status, if any
    fn status_column() -> Option<usize> {
        None
    }
}

impl TableRow for Plan {
    fn headers() -> &'static [&'static str] {
        PLAN_LIST_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
            self.provider_id.clone(),
            self.status.clone(),
        ]
    }

    fn status_column() -> Option<usize> {
        Some(4)
    }
}

impl TableRow for Restore {
    fn headers() -> &'static [&'static str] {
        RESTORE_LIST_COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.project_id.clone().unwrap_or_default(),
            self.provider_id.clone(),
            self.checkpoint_id.clone(),
            self.restore_target.clone().unwrap_or_default(),
            Value::Object(self.parameters.clone()).to_string(),
            self.status.clone().unwrap_or_default(),
        ]
    }

    fn status_column() -> Option<usize> {
        Some(6)
    }
}

/// Strings print raw, null prints empty, everything else as compact JSON
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render records as a list table, optionally sorted on one column
    pub fn render_list<T: TableRow>(&self, records: &[T], sort_column: Option<usize>) -> String {
        let mut rows: Vec<Vec<String>> = records.iter().map(TableRow::cells).collect();
        if let Some(column) = sort_column {
            rows.sort_by(|a, b| a.get(column).cmp(&b.get(column)));
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                T::headers()
                    .iter()
                    .map(|h| Cell::new(h).set_alignment(CellAlignment::Left)),
            );

        let status_column = T::status_column();
        for row in rows {
            table.add_row(row.into_iter().enumerate().map(|(i, text)| {
                if Some(i) == status_column {
                    let color = self.theme.status_color(&text);
                    Cell::new(text).fg(color)
                } else {
                    Cell::new(text)
                }
            }));
        }

        table.to_string()
    }

    /// Render a single record as a Property/Value table with sorted keys
    pub fn render_properties(&self, record: &Value) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new("Property"), Cell::new("Value")]);

        if let Value::Object(map) = record {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in entries {
                let text = format_value(value);
                let value_cell = if key == "status" {
                    let color = self.theme.status_color(&text);
                    Cell::new(text).fg(color)
                } else {
                    Cell::new(text)
                };
                table.add_row(vec![Cell::new(key).fg(self.theme.info), value_cell]);
            }
        }

        table.to_string()
    }
}
