use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use pharmgen_core::validate_dataset;

use crate::builders::BuildContext;
use crate::dataset::{DatasetCounts, assemble_dataset};
use crate::errors::GenerationError;
use crate::model::{ArtifactPaths, GenerateOptions, GenerationReport};
use crate::output::archive::write_archive;
use crate::output::json::write_document_file;
use crate::output::sql::write_statements_file;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub paths: ArtifactPaths,
    pub report: GenerationReport,
}

/// Entry point for generating the dataset artifacts.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.options.validate()?;

        let generated_at = self.options.generated_at.unwrap_or_else(chrono::Utc::now);
        let paths = self.options.artifact_paths();
        std::fs::create_dir_all(&self.options.out_dir).map_err(|source| {
            GenerationError::OutputDir {
                path: self.options.out_dir.clone(),
                source,
            }
        })?;

        info!(
            seed = self.options.seed,
            commercial = self.options.commercial_count,
            compounding = self.options.compounding_count,
            out_dir = %self.options.out_dir.display(),
            "generation started"
        );

        let counts = DatasetCounts {
            commercial: self.options.commercial_count,
            compounding: self.options.compounding_count,
            progress_every: self.options.progress_every,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let records = assemble_dataset(counts, &BuildContext::new(generated_at), &mut rng);
        let summary = validate_dataset(&records)?;
        info!(
            total = summary.total,
            commercial = summary.commercial,
            compounding = summary.compounding,
            "dataset assembled"
        );

        let document_bytes = write_document_file(&paths.document, &records)?;
        info!(path = %paths.document.display(), bytes = document_bytes, "document written");

        let mut formulation_rng =
            ChaCha8Rng::seed_from_u64(hash_seed(self.options.seed, "formulations"));
        let stats = write_statements_file(
            &paths.statements,
            &records,
            generated_at,
            &mut formulation_rng,
        )?;
        info!(
            path = %paths.statements.display(),
            statements = stats.statements,
            bytes = stats.bytes,
            "statements written"
        );

        let archive_bytes = write_archive(
            &paths.archive,
            &[paths.document.as_path(), paths.statements.as_path()],
        )?;
        info!(path = %paths.archive.display(), bytes = archive_bytes, "archive written");

        let report = GenerationReport {
            seed: self.options.seed,
            generated_at,
            records: summary,
            document_bytes,
            statements_bytes: stats.bytes,
            statements_written: stats.statements,
            archive_bytes,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(duration_ms = report.duration_ms, "generation completed");

        Ok(GenerationResult { paths, report })
    }
}

/// Derive an independent stream seed for a named purpose.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
