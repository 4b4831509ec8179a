use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units::Amount;

/// One synthetic product, commercial or compounding.
///
/// Field order is part of the document contract: `id, name_ar, name_en, type,
/// category, dosage_form, <variant fields>, notes, created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name_ar: String,
    pub name_en: String,
    #[serde(flatten)]
    pub kind: ProductKind,
    pub notes: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl ProductRecord {
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn category(&self) -> &str {
        match &self.kind {
            ProductKind::Commercial(product) => &product.category,
            ProductKind::Compounding(product) => &product.category,
        }
    }

    pub fn dosage_form(&self) -> &str {
        match &self.kind {
            ProductKind::Commercial(product) => &product.dosage_form,
            ProductKind::Compounding(product) => &product.dosage_form,
        }
    }

    pub fn formulation(&self) -> Option<&Formulation> {
        match &self.kind {
            ProductKind::Commercial(_) => None,
            ProductKind::Compounding(product) => Some(&product.formulation),
        }
    }
}

/// Closed record type tag, serialized as the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    Commercial(CommercialProduct),
    Compounding(CompoundingProduct),
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Commercial(_) => "commercial",
            ProductKind::Compounding(_) => "compounding",
        }
    }
}

/// Manufactured, marketed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialProduct {
    pub category: String,
    pub dosage_form: String,
    pub active_ingredient: String,
    pub strength: Amount,
    pub manufacturer: String,
    pub country: String,
}

/// Custom-prepared formulation. `manufacturer` and `country` are always
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingProduct {
    pub category: String,
    pub dosage_form: String,
    pub formulation: Formulation,
    pub manufacturer: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formulation {
    pub ingredients: Vec<IngredientLine>,
    pub procedure: String,
}

/// One constituent of a formulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub amount: Amount,
    pub role: IngredientRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientRole {
    #[serde(rename = "API")]
    Api,
    Base,
    Excipient,
    Preservative,
}

impl IngredientRole {
    pub const ALL: [IngredientRole; 4] = [
        IngredientRole::Api,
        IngredientRole::Base,
        IngredientRole::Excipient,
        IngredientRole::Preservative,
    ];
}

/// ISO-8601 UTC timestamps with microseconds and a trailing `Z`.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

    pub fn format(value: &DateTime<Utc>) -> String {
        value.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
