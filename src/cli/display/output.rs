//! Output format selection

use super::table::{TableRenderer, TableRow};
use crate::shared::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Turns records into text in the selected format
pub struct Printer {
    format: OutputFormat,
    renderer: TableRenderer,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            renderer: TableRenderer::new(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// `sort_column` only affects table output.
    pub fn list<T: Serialize + TableRow>(
        &self,
        records: &[T],
        sort_column: Option<usize>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.renderer.render_list(records, sort_column)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(records)?),
        }
    }

    pub fn record<T: Serialize>(&self, record: &T) -> Result<String> {
        match self.format {
            OutputFormat::Table => {
                let value = serde_json::to_value(record)?;
                Ok(self.renderer.render_properties(&value))
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(record)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Plan;

    #[test]
    fn test_json_list() {
        let plans = vec![Plan {
            id: "p-1".to_string(),
            name: "daily".to_string(),
            ..Plan::default()
        }];
        let output = Printer::new(OutputFormat::Json).list(&plans, Some(1)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "daily");
    }

    #[test]
    fn test_yaml_record() {
        let plan = Plan {
            id: "p-1".to_string(),
            status: "started".to_string(),
            ..Plan::default()
        };
        let output = Printer::new(OutputFormat::Yaml).record(&plan).unwrap();
        assert!(output.contains("status: started"));
    }
}
