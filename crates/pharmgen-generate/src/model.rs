use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmgen_core::DatasetSummary;

use crate::errors::GenerationError;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where the artifacts are written; created if absent.
    pub out_dir: PathBuf,
    /// Artifact base name; the record total and extension are appended.
    pub file_stem: String,
    /// Seed for the record stream.
    pub seed: u64,
    /// Number of commercial records.
    pub commercial_count: u32,
    /// Number of compounding records.
    pub compounding_count: u32,
    /// Log a progress event every N records of each type.
    pub progress_every: u32,
    /// Fixed generation instant. Defaults to the clock at run start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("output"),
            file_stem: "pharm_dataset".to_string(),
            seed: 42,
            commercial_count: 1200,
            compounding_count: 800,
            progress_every: 200,
            generated_at: None,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.file_stem.trim().is_empty() {
            return Err(GenerationError::InvalidOptions(
                "file_stem must not be empty".to_string(),
            ));
        }
        if self.file_stem.contains(['/', '\\']) {
            return Err(GenerationError::InvalidOptions(
                "file_stem must be a bare file name".to_string(),
            ));
        }
        if self.progress_every == 0 {
            return Err(GenerationError::InvalidOptions(
                "progress_every must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn total_count(&self) -> u64 {
        u64::from(self.commercial_count) + u64::from(self.compounding_count)
    }

    /// Paths of the three artifacts for this configuration.
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.out_dir, &self.file_stem, self.total_count())
    }
}

/// Locations of the document, statements, and archive artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub document: PathBuf,
    pub statements: PathBuf,
    pub archive: PathBuf,
}

impl ArtifactPaths {
    pub fn new(out_dir: &Path, stem: &str, total: u64) -> Self {
        let base = format!("{stem}_{total}");
        Self {
            document: out_dir.join(format!("{base}.json")),
            statements: out_dir.join(format!("{base}.sql")),
            archive: out_dir.join(format!("{base}.zip")),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    #[serde(with = "pharmgen_core::record::timestamp")]
    pub generated_at: DateTime<Utc>,
    pub records: DatasetSummary,
    pub document_bytes: u64,
    pub statements_bytes: u64,
    pub statements_written: u64,
    pub archive_bytes: u64,
    pub duration_ms: u64,
}
