use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pharmgen_core::{DatasetSummary, ProductRecord, validate_dataset};

use crate::errors::GenerationError;

const PRODUCTS_INSERT: &str = "INSERT INTO products (";
const FORMULATIONS_INSERT: &str = "INSERT INTO formulations (";
const VALUES_MARKER: &str = "VALUES (";

/// Outcome of re-reading a produced archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub entries: Vec<String>,
    pub records: DatasetSummary,
    pub product_inserts: usize,
    pub formulation_inserts: usize,
}

/// Reopen an archive and cross-check the document against the statements.
///
/// The archive must hold exactly one `.json` and one `.sql` entry. Every
/// document record must have exactly one products insert and one
/// formulations insert.
pub fn verify_archive(path: &Path) -> Result<VerificationReport, GenerationError> {
    let mut archive = zip::ZipArchive::new(BufReader::new(File::open(path)?))?;
    if archive.len() != 2 {
        return Err(GenerationError::Verification(format!(
            "expected 2 archive entries, found {}",
            archive.len()
        )));
    }

    let mut entries = Vec::with_capacity(2);
    let mut document = None;
    let mut statements = None;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        let mut contents = String::new();
        entry.read_to_string(&mut contents)?;

        if name.ends_with(".json") {
            document = Some(contents);
        } else if name.ends_with(".sql") {
            statements = Some(contents);
        } else {
            return Err(GenerationError::Verification(format!(
                "unexpected archive entry: {name}"
            )));
        }
        entries.push(name);
    }

    let document = document
        .ok_or_else(|| GenerationError::Verification("archive has no document".to_string()))?;
    let statements = statements
        .ok_or_else(|| GenerationError::Verification("archive has no statements".to_string()))?;

    let records: Vec<ProductRecord> = serde_json::from_str(&document)?;
    let summary = validate_dataset(&records)?;
    let (product_inserts, formulation_inserts) = verify_statements(&records, &statements)?;

    Ok(VerificationReport {
        entries,
        records: summary,
        product_inserts,
        formulation_inserts,
    })
}

/// Match inserts to records by id. Returns `(products, formulations)` insert
/// counts.
pub fn verify_statements(
    records: &[ProductRecord],
    statements: &str,
) -> Result<(usize, usize), GenerationError> {
    for table in ["products", "formulations"] {
        if !statements.contains(&format!("CREATE TABLE IF NOT EXISTS {table} (")) {
            return Err(GenerationError::Verification(format!(
                "missing table definition for {table}"
            )));
        }
    }

    let mut seen: HashMap<Uuid, (usize, usize)> =
        records.iter().map(|record| (record.id, (0, 0))).collect();

    let product_ids = insert_ids(statements, PRODUCTS_INSERT, 1)?;
    for ids in &product_ids {
        let counts = seen.get_mut(&ids[0]).ok_or_else(|| {
            GenerationError::Verification(format!("products insert for unknown id {}", ids[0]))
        })?;
        counts.0 += 1;
    }

    let formulation_ids = insert_ids(statements, FORMULATIONS_INSERT, 2)?;
    let mut formulation_keys = HashSet::with_capacity(formulation_ids.len());
    for ids in &formulation_ids {
        if !formulation_keys.insert(ids[0]) {
            return Err(GenerationError::Verification(format!(
                "duplicate formulation id {}",
                ids[0]
            )));
        }
        let counts = seen.get_mut(&ids[1]).ok_or_else(|| {
            GenerationError::Verification(format!(
                "formulations insert for unknown product {}",
                ids[1]
            ))
        })?;
        counts.1 += 1;
    }

    if let Some((id, counts)) = seen.iter().find(|(_, counts)| **counts != (1, 1)) {
        return Err(GenerationError::Verification(format!(
            "record {id} has {} products and {} formulations inserts",
            counts.0, counts.1
        )));
    }

    Ok((product_ids.len(), formulation_ids.len()))
}

/// Leading uuid literals of every insert into one table.
fn insert_ids(
    statements: &str,
    prefix: &str,
    count: usize,
) -> Result<Vec<Vec<Uuid>>, GenerationError> {
    statements
        .match_indices(prefix)
        .map(|(offset, _)| {
            let statement = &statements[offset..];
            statement
                .find(VALUES_MARKER)
                .and_then(|start| {
                    leading_uuid_literals(&statement[start + VALUES_MARKER.len()..], count)
                })
                .ok_or_else(|| {
                    GenerationError::Verification(format!("malformed insert at byte {offset}"))
                })
        })
        .collect()
}

fn leading_uuid_literals(values: &str, count: usize) -> Option<Vec<Uuid>> {
    let mut rest = values;
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        rest = rest.strip_prefix('\'')?;
        let (literal, tail) = rest.split_once('\'')?;
        ids.push(Uuid::parse_str(literal).ok()?);
        rest = tail.trim_start_matches([',', ' ']);
    }
    Some(ids)
}
