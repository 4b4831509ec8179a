use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{ProductKind, ProductRecord};
use crate::{MAX_INGREDIENT_LINES, MIN_INGREDIENT_LINES};

/// Record counts of a validated dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total: usize,
    pub commercial: usize,
    pub compounding: usize,
}

/// Validate record invariants across a dataset.
///
/// This checks:
/// - ids are pairwise distinct
/// - commercial records carry a non-empty active ingredient and strength
/// - compounding formulations hold 2..=5 ingredient lines and no
///   manufacturer/country
pub fn validate_dataset(records: &[ProductRecord]) -> Result<DatasetSummary> {
    let mut ids = HashSet::with_capacity(records.len());
    let mut summary = DatasetSummary::default();

    for record in records {
        if !ids.insert(record.id) {
            return Err(Error::InvalidDataset(format!(
                "duplicate record id: {}",
                record.id
            )));
        }

        match &record.kind {
            ProductKind::Commercial(product) => {
                if product.active_ingredient.trim().is_empty() {
                    return Err(Error::InvalidDataset(format!(
                        "commercial record {} has an empty active ingredient",
                        record.id
                    )));
                }
                if product.strength.value <= 0.0 {
                    return Err(Error::InvalidDataset(format!(
                        "commercial record {} has a non-positive strength",
                        record.id
                    )));
                }
                summary.commercial += 1;
            }
            ProductKind::Compounding(product) => {
                let lines = product.formulation.ingredients.len();
                if !(MIN_INGREDIENT_LINES..=MAX_INGREDIENT_LINES).contains(&lines) {
                    return Err(Error::InvalidDataset(format!(
                        "compounding record {} has {lines} ingredient lines",
                        record.id
                    )));
                }
                if product.manufacturer.is_some() || product.country.is_some() {
                    return Err(Error::InvalidDataset(format!(
                        "compounding record {} carries a manufacturer or country",
                        record.id
                    )));
                }
                summary.compounding += 1;
            }
        }
    }

    summary.total = records.len();
    Ok(summary)
}
