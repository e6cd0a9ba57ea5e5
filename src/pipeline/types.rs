//! Pipeline result types

use crate::types::ArtifactKind;
use std::path::PathBuf;
use std::time::Duration;

/// One local artifact produced by a pipeline run
#[derive(Debug, Clone)]
pub struct ArtifactInfo {
    /// Encoding of the artifact
    pub kind: ArtifactKind,
    /// Where it was written
    pub path: PathBuf,
    /// Records it contains
    pub records: usize,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Records fetched from the endpoint
    pub records: usize,
    /// Local artifacts written, in stage order
    pub artifacts: Vec<ArtifactInfo>,
    /// Full path of the uploaded object, `None` when the upload was skipped
    pub uploaded: Option<String>,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl PipelineReport {
    /// One-line human summary for CLI output
    pub fn summary(&self) -> String {
        let uploaded = match &self.uploaded {
            Some(path) => format!("uploaded to {path}"),
            None => "upload skipped".to_string(),
        };
        format!(
            "Synced {} records, {} artifacts, {uploaded} ({:.2}s)",
            self.records,
            self.artifacts.len(),
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtifactKind;

    #[test]
    fn test_report_summary() {
        let report = PipelineReport {
            records: 3,
            artifacts: vec![ArtifactInfo {
                kind: ArtifactKind::Json,
                path: PathBuf::from("products.json"),
                records: 3,
            }],
            uploaded: Some("gs://bucket/products/products.json".to_string()),
            elapsed: Duration::from_millis(1500),
        };

        let summary = report.summary();
        assert!(summary.contains("3 records"));
        assert!(summary.contains("gs://bucket/products/products.json"));
        assert!(summary.contains("1.50s"));
    }

    #[test]
    fn test_report_summary_skipped_upload() {
        let report = PipelineReport {
            records: 0,
            artifacts: vec![],
            uploaded: None,
            elapsed: Duration::from_millis(10),
        };

        assert!(report.summary().contains("upload skipped"));
    }
}
