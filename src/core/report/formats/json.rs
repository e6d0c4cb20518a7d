//! JSON report generator
//!
//! Serializes the full snapshot so other tools can chart it themselves.

use crate::core::dashboard::DashboardSnapshot;
use crate::core::report::ReportGenerator;
use std::error::Error;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String, Box<dyn Error>> {
        let mut json = serde_json::to_string_pretty(snapshot)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::tests::{exhausted_snapshot, sample_snapshot};

    #[test]
    fn test_render_is_parseable_snapshot() {
        let snapshot = sample_snapshot();
        let out = JsonReporter::new().render(&snapshot).unwrap();

        let parsed: DashboardSnapshot = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.program_name, snapshot.program_name);
        assert_eq!(parsed.days_required_history, snapshot.days_required_history);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["as_of"], "2025-12-01");
        assert_eq!(value["progress"]["earned"], 15);
    }

    #[test]
    fn test_missing_average_is_null() {
        let out = JsonReporter::new().render(&exhausted_snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert!(value["grade_average"].is_null());
        assert_eq!(value["pace_text"], "∞");
    }
}
