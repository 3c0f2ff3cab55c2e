//! Status classification for CLI output

/// Coarse grouping of plan and restore status strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Healthy,
    Pending,
    Failed,
    Unknown,
}

impl StatusClass {
    pub fn classify(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "started" | "success" | "succeed" | "available" => StatusClass::Healthy,
            "suspended" | "in_progress" | "creating" | "deleting" | "restoring" | "pending" => {
                StatusClass::Pending
            }
            "error" | "failed" | "fail" | "error_deleting" => StatusClass::Failed,
            _ => StatusClass::Unknown,
        }
    }
}
