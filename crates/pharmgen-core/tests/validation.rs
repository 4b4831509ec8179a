use chrono::Utc;
use uuid::Uuid;

use pharmgen_core::{
    Amount, CompoundingProduct, Error, Formulation, IngredientLine, IngredientRole, ProductKind,
    ProductRecord, Unit, validate_dataset,
};

fn line(name: &str) -> IngredientLine {
    IngredientLine {
        name: name.to_string(),
        amount: Amount::new(100.0, Unit::Milligram),
        role: IngredientRole::Excipient,
    }
}

fn compounding(id: u128, lines: usize) -> ProductRecord {
    ProductRecord {
        id: Uuid::from_u128(id),
        name_ar: format!("تركيبة تركيبية {id}"),
        name_en: format!("CompoundFormula {id}"),
        kind: ProductKind::Compounding(CompoundingProduct {
            category: "هضمية".to_string(),
            dosage_form: "سيروب".to_string(),
            formulation: Formulation {
                ingredients: (0..lines).map(|i| line(&format!("ing{i}"))).collect(),
                procedure: "1.".to_string(),
            },
            manufacturer: None,
            country: None,
        }),
        notes: String::new(),
        created_at: Utc::now(),
    }
}

#[test]
fn validate_counts_record_types() {
    let records = vec![compounding(1, 2), compounding(2, 5)];
    let summary = validate_dataset(&records).expect("valid dataset");

    assert_eq!(summary.total, 2);
    assert_eq!(summary.compounding, 2);
    assert_eq!(summary.commercial, 0);
}

#[test]
fn validate_rejects_duplicate_ids() {
    let records = vec![compounding(7, 3), compounding(7, 3)];
    let result = validate_dataset(&records);
    assert!(matches!(result, Err(Error::InvalidDataset(_))));
}

#[test]
fn validate_rejects_formulation_size_out_of_bounds() {
    assert!(validate_dataset(&[compounding(1, 1)]).is_err());
    assert!(validate_dataset(&[compounding(1, 6)]).is_err());
}

#[test]
fn validate_rejects_compounding_with_origin() {
    let mut record = compounding(1, 3);
    if let ProductKind::Compounding(product) = &mut record.kind {
        product.country = Some("مصر".to_string());
    }
    assert!(validate_dataset(&[record]).is_err());
}
