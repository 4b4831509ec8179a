use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use pharmgen_core::record::timestamp;
use pharmgen_core::vocabulary::PACKAGE_INSERT_PROCEDURE;
use pharmgen_core::{IngredientLine, IngredientRole, ProductKind, ProductRecord};

use crate::builders::random_uuid;
use crate::errors::GenerationError;
use crate::output::CountingWriter;

pub const PRODUCTS_DDL: &str = "CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    name_ar TEXT NOT NULL,
    name_en TEXT,
    category TEXT,
    dosage_form TEXT,
    short_description TEXT,
    created_at TIMESTAMPTZ DEFAULT NOW()
);
";

pub const FORMULATIONS_DDL: &str = "CREATE TABLE IF NOT EXISTS formulations (
    id UUID PRIMARY KEY,
    product_id UUID REFERENCES products(id),
    version INTEGER DEFAULT 1,
    ingredients JSONB,
    procedure TEXT,
    review_status TEXT DEFAULT 'pending',
    created_at TIMESTAMPTZ DEFAULT NOW()
);
";

/// Version stamped on every formulation row.
pub const FORMULATION_VERSION: u32 = 1;

/// Totals for a written statements file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementStats {
    /// Table definitions plus inserts.
    pub statements: u64,
    pub bytes: u64,
}

/// Quote a value as a SQL string literal, doubling embedded single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Review status of the formulation row derived from a record.
pub fn review_status(kind: &ProductKind) -> &'static str {
    match kind {
        ProductKind::Commercial(_) => "approved",
        ProductKind::Compounding(_) => "pending",
    }
}

/// Write the table definitions followed by one products insert and one
/// formulations insert per record.
///
/// Formulation ids are drawn from `rng`, independent of the product ids.
pub fn write_statements<W: Write, R: Rng + ?Sized>(
    writer: W,
    records: &[ProductRecord],
    generated_at: DateTime<Utc>,
    rng: &mut R,
) -> Result<StatementStats, GenerationError> {
    let mut out = CountingWriter::new(writer);

    writeln!(
        out,
        "-- SQL insert statements for products and formulations (Postgres)"
    )?;
    writeln!(out, "-- Generated on: {}", timestamp::format(&generated_at))?;
    writeln!(out)?;
    writeln!(out, "-- Create tables if not exist")?;
    writeln!(out, "{PRODUCTS_DDL}")?;
    writeln!(out, "{FORMULATIONS_DDL}")?;
    let mut statements = 2_u64;

    for record in records {
        writeln!(out, "{}", product_insert(record))?;
        writeln!(out, "{}", formulation_insert(record, random_uuid(rng))?)?;
        writeln!(out)?;
        statements += 2;
    }

    out.flush()?;
    Ok(StatementStats {
        statements,
        bytes: out.bytes_written(),
    })
}

pub fn write_statements_file<R: Rng + ?Sized>(
    path: &Path,
    records: &[ProductRecord],
    generated_at: DateTime<Utc>,
    rng: &mut R,
) -> Result<StatementStats, GenerationError> {
    let file =
        File::create(path).map_err(|source| GenerationError::statements(path.into(), source))?;
    write_statements(BufWriter::new(file), records, generated_at, rng)
        .map_err(|err| err.at_path(path, GenerationError::statements))
}

/// `INSERT INTO products` for a record; `notes` lands in `short_description`.
pub fn product_insert(record: &ProductRecord) -> String {
    format!(
        "INSERT INTO products (id, name_ar, name_en, category, dosage_form, short_description, created_at) VALUES ({}, {}, {}, {}, {}, {}, {});",
        quote_literal(&record.id.to_string()),
        quote_literal(&record.name_ar),
        quote_literal(&record.name_en),
        quote_literal(record.category()),
        quote_literal(record.dosage_form()),
        quote_literal(&record.notes),
        quote_literal(&timestamp::format(&record.created_at)),
    )
}

/// `INSERT INTO formulations` for a record.
///
/// Commercial records get a single API line built from the active
/// ingredient and strength, and the package-insert procedure.
pub fn formulation_insert(
    record: &ProductRecord,
    formulation_id: Uuid,
) -> Result<String, GenerationError> {
    let (ingredients, procedure) = match &record.kind {
        ProductKind::Commercial(product) => {
            let line = IngredientLine {
                name: product.active_ingredient.clone(),
                amount: product.strength,
                role: IngredientRole::Api,
            };
            (serde_json::to_string(&[line])?, PACKAGE_INSERT_PROCEDURE)
        }
        ProductKind::Compounding(product) => (
            serde_json::to_string(&product.formulation.ingredients)?,
            product.formulation.procedure.as_str(),
        ),
    };

    Ok(format!(
        "INSERT INTO formulations (id, product_id, version, ingredients, procedure, review_status, created_at) VALUES ({}, {}, {FORMULATION_VERSION}, {}::jsonb, {}, {}, {});",
        quote_literal(&formulation_id.to_string()),
        quote_literal(&record.id.to_string()),
        quote_literal(&ingredients),
        quote_literal(procedure),
        quote_literal(review_status(&record.kind)),
        quote_literal(&timestamp::format(&record.created_at)),
    ))
}
