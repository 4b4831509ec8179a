use chrono::{TimeZone, Utc};
use uuid::Uuid;

use pharmgen_core::{
    Amount, CommercialProduct, CompoundingProduct, Formulation, IngredientLine, IngredientRole,
    ProductKind, ProductRecord, Unit,
};

fn created_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
        .single()
        .expect("valid timestamp")
}

fn commercial() -> ProductRecord {
    ProductRecord {
        id: Uuid::from_u128(1),
        name_ar: "دواء تجاري 1".to_string(),
        name_en: "CommercialMed 1".to_string(),
        kind: ProductKind::Commercial(CommercialProduct {
            category: "جلدية".to_string(),
            dosage_form: "قرص".to_string(),
            active_ingredient: "Ibuprofen".to_string(),
            strength: Amount::new(5.0, Unit::MilligramPerMillilitre),
            manufacturer: "MediLab".to_string(),
            country: "مصر".to_string(),
        }),
        notes: "معلومات مرجعية.".to_string(),
        created_at: created_at(),
    }
}

fn compounding() -> ProductRecord {
    ProductRecord {
        id: Uuid::from_u128(2),
        name_ar: "تركيبة تركيبية 1".to_string(),
        name_en: "CompoundFormula 1".to_string(),
        kind: ProductKind::Compounding(CompoundingProduct {
            category: "أذنية".to_string(),
            dosage_form: "جل".to_string(),
            formulation: Formulation {
                ingredients: vec![
                    IngredientLine {
                        name: "Carbopol".to_string(),
                        amount: Amount::new(0.5, Unit::Gram),
                        role: IngredientRole::Base,
                    },
                    IngredientLine {
                        name: "Mupirocin".to_string(),
                        amount: Amount::new(25.0, Unit::PercentWeight),
                        role: IngredientRole::Api,
                    },
                ],
                procedure: "1. step".to_string(),
            },
            manufacturer: None,
            country: None,
        }),
        notes: "صيغة".to_string(),
        created_at: created_at(),
    }
}

#[test]
fn commercial_record_keeps_field_order_and_script() {
    let json = serde_json::to_string(&commercial()).expect("serialize");

    let keys = [
        "\"id\"",
        "\"name_ar\"",
        "\"name_en\"",
        "\"type\"",
        "\"category\"",
        "\"dosage_form\"",
        "\"active_ingredient\"",
        "\"strength\"",
        "\"manufacturer\"",
        "\"country\"",
        "\"notes\"",
        "\"created_at\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("missing {key}")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{json}");

    assert!(json.contains("\"type\":\"commercial\""));
    assert!(json.contains("\"strength\":\"5 mg/mL\""));
    assert!(json.contains("دواء تجاري 1"));
    assert!(!json.contains("\\u"));
    assert!(!json.contains("formulation"));
    assert!(json.contains("\"created_at\":\"2025-03-14T09:26:53.000000Z\""));
}

#[test]
fn compounding_record_serializes_null_origin_and_amount_strings() {
    let value = serde_json::to_value(compounding()).expect("serialize");

    assert_eq!(value["type"], "compounding");
    assert!(value["manufacturer"].is_null());
    assert!(value["country"].is_null());
    assert!(value.get("active_ingredient").is_none());
    assert!(value.get("strength").is_none());

    let ingredients = value["formulation"]["ingredients"]
        .as_array()
        .expect("ingredients array");
    assert_eq!(ingredients[0]["amount"], "0.5 g");
    assert_eq!(ingredients[1]["amount"], "25 % w/w");
    assert_eq!(ingredients[1]["role"], "API");
}

#[test]
fn records_parse_back_from_document_form() {
    let records = vec![commercial(), compounding()];
    let json = serde_json::to_string_pretty(&records).expect("serialize");
    let parsed: Vec<ProductRecord> = serde_json::from_str(&json).expect("parse");

    assert_eq!(parsed, records);
}

#[test]
fn amount_rejects_unknown_unit() {
    let result = "10 drops".parse::<Amount>();
    assert!(matches!(result, Err(pharmgen_core::Error::UnknownUnit(_))));

    let result = "ten mg".parse::<Amount>();
    assert!(matches!(result, Err(pharmgen_core::Error::InvalidAmount(_))));
}
