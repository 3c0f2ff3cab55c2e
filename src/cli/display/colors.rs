//! Color theme for CLI output

use super::icons::StatusClass;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color for a plan or restore status
    pub fn status_color(&self, status: &str) -> TableColor {
        match StatusClass::classify(status) {
            StatusClass::Healthy => self.success,
            StatusClass::Pending => self.warning,
            StatusClass::Failed => self.error,
            StatusClass::Unknown => self.muted,
        }
    }
}
