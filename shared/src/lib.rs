use serde::{Deserialize, Serialize};

// API error type and endpoint constants
pub mod api;
pub use api::FetchError;

/// Summary of a tracked ML experiment as returned by the insights API.
///
/// One record per experiment; `experiment_id` uniquely keys each summary
/// within a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub experiment_id: String,
    pub name: String,
    pub run_count: u64,
    /// Storage path for the experiment's output files (opaque, e.g. "s3://...")
    pub artifact_location: String,
    /// Status tag; "active" is distinguished, anything else renders as archived
    pub lifecycle_stage: String,
}

impl ExperimentSummary {
    /// Whether this experiment is in the active lifecycle stage.
    /// Any other stage value (archived, deleted, ...) counts as non-active.
    pub fn is_active(&self) -> bool {
        self.lifecycle_stage == "active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_active_experiment() {
        let json = r#"[{
            "experiment_id": "1",
            "name": "Exp A",
            "run_count": 1,
            "artifact_location": "s3://x",
            "lifecycle_stage": "active"
        }]"#;
        let parsed: Vec<ExperimentSummary> = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.len(), 1);
        let exp = &parsed[0];
        assert_eq!(exp.experiment_id, "1");
        assert_eq!(exp.name, "Exp A");
        assert_eq!(exp.run_count, 1);
        assert_eq!(exp.artifact_location, "s3://x");
        assert!(exp.is_active());
    }

    #[test]
    fn parse_deleted_experiment() {
        let json = r#"[{
            "experiment_id": "2",
            "name": "Exp B",
            "run_count": 5,
            "artifact_location": "s3://y",
            "lifecycle_stage": "deleted"
        }]"#;
        let parsed: Vec<ExperimentSummary> = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].run_count, 5);
        assert!(!parsed[0].is_active());
    }

    #[test]
    fn parse_empty_response() {
        let parsed: Vec<ExperimentSummary> = serde_json::from_str("[]").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn only_exact_active_stage_counts() {
        let mut exp = ExperimentSummary {
            experiment_id: "3".to_string(),
            name: "Exp C".to_string(),
            run_count: 0,
            artifact_location: "dbfs:/z".to_string(),
            lifecycle_stage: "active".to_string(),
        };
        assert!(exp.is_active());

        for stage in ["Active", "archived", "deleted", ""] {
            exp.lifecycle_stage = stage.to_string();
            assert!(!exp.is_active(), "stage {:?} must not be active", stage);
        }
    }

    #[test]
    fn summary_serialization_field_names() {
        let exp = ExperimentSummary {
            experiment_id: "42".to_string(),
            name: "tuning".to_string(),
            run_count: 7,
            artifact_location: "s3://bucket/42".to_string(),
            lifecycle_stage: "active".to_string(),
        };
        let value = serde_json::to_value(&exp).unwrap();

        assert_eq!(value["experiment_id"], "42");
        assert_eq!(value["run_count"], 7);
        assert_eq!(value["artifact_location"], "s3://bucket/42");
        assert_eq!(value["lifecycle_stage"], "active");
    }
}
