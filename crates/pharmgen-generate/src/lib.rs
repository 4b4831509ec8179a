//! Synthetic pharmaceutical dataset generator.
//!
//! Builds commercial and compounding product records from the fixed
//! vocabularies in `pharmgen-core`, shuffles them, and writes a JSON document,
//! a SQL statements file, and a zip archive bundling both.

pub mod builders;
pub mod checks;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;

pub use checks::{VerificationReport, verify_archive};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{ArtifactPaths, GenerateOptions, GenerationReport};
