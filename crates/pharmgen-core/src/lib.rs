//! Core contracts for the pharmaceutical dataset generator.
//!
//! This crate defines the product record model, the fixed sampling
//! vocabularies, and the dataset invariant checks shared by the generator
//! and the CLI.

pub mod error;
pub mod record;
pub mod units;
pub mod validation;
pub mod vocabulary;

pub use error::{Error, Result};
pub use record::{
    CommercialProduct, CompoundingProduct, Formulation, IngredientLine, IngredientRole,
    ProductKind, ProductRecord,
};
pub use units::{Amount, Unit};
pub use validation::{DatasetSummary, validate_dataset};

/// Inclusive bounds on ingredient lines per compounding formulation.
pub const MIN_INGREDIENT_LINES: usize = 2;
pub const MAX_INGREDIENT_LINES: usize = 5;
