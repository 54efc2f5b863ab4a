//! Storable analysis record wrapping a gap result

use crate::error::Result;
use crate::processing::gap_analyzer::GapResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const GAP_ANALYSIS: &str = "gap_analysis";

/// A gap result together with where its inputs came from. The result is
/// kept as an opaque blob for whatever store persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_type: String,
    pub resume_source: String,
    pub job_source: String,
    pub created_at: DateTime<Utc>,
    pub result: GapResult,
}

impl AnalysisRecord {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>, result: GapResult) -> Self {
        Self {
            analysis_type: GAP_ANALYSIS.to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            created_at: Utc::now(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the record as pretty JSON, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
