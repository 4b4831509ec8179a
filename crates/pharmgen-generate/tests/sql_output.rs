use chrono::{TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use pharmgen_core::vocabulary::PACKAGE_INSERT_PROCEDURE;
use pharmgen_core::{ProductKind, ProductRecord};
use pharmgen_generate::builders::{BuildContext, build_commercial, build_compounding};
use pharmgen_generate::checks::verify_statements;
use pharmgen_generate::output::sql::{
    formulation_insert, product_insert, quote_literal, write_statements,
};

fn ctx() -> BuildContext {
    BuildContext::new(
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0)
            .single()
            .expect("valid timestamp"),
    )
}

/// Literals close properly when doubled quotes are treated as escapes.
fn literals_balanced(statement: &str) -> bool {
    let mut chars = statement.chars().peekable();
    let mut in_literal = false;
    while let Some(ch) = chars.next() {
        if ch != '\'' {
            continue;
        }
        if in_literal && chars.peek() == Some(&'\'') {
            chars.next();
        } else {
            in_literal = !in_literal;
        }
    }
    !in_literal && statement.ends_with(");")
}

fn render(records: &[ProductRecord]) -> String {
    let mut buffer = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    write_statements(&mut buffer, records, ctx().created_at, &mut rng).expect("write statements");
    String::from_utf8(buffer).expect("utf8 statements")
}

#[test]
fn quote_literal_doubles_single_quotes() {
    assert_eq!(quote_literal("plain"), "'plain'");
    assert_eq!(quote_literal("O'Brien's"), "'O''Brien''s'");
    assert_eq!(quote_literal("''"), "''''''");
}

#[test]
fn quoted_free_text_stays_well_formed() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut record = build_compounding(1, &ctx(), &mut rng);
    record.name_en = "Baker's Cream".to_string();
    record.notes = "Don't freeze".to_string();
    if let ProductKind::Compounding(product) = &mut record.kind {
        product.formulation.ingredients[0].name = "Whitfield's Base".to_string();
        product.formulation.procedure = "Mix 'gently'.\nStore cold.".to_string();
    }

    let product = product_insert(&record);
    assert!(product.contains("'Baker''s Cream'"));
    assert!(product.contains("'Don''t freeze'"));
    assert!(literals_balanced(&product));

    let formulation = formulation_insert(&record, Uuid::from_u128(9)).expect("formulation insert");
    assert!(formulation.contains("Whitfield''s Base"));
    assert!(formulation.contains("'Mix ''gently''.\nStore cold.'"));
    assert!(formulation.contains("'pending'"));
    assert!(literals_balanced(&formulation));
}

#[test]
fn commercial_rows_synthesize_single_api_line() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let record = build_commercial(4, &ctx(), &mut rng);
    let ProductKind::Commercial(product) = &record.kind else {
        panic!("expected commercial record");
    };

    let statement = formulation_insert(&record, Uuid::from_u128(1)).expect("formulation insert");
    let expected_json = format!(
        "[{{\"name\":\"{}\",\"amount\":\"{}\",\"role\":\"API\"}}]",
        product.active_ingredient, product.strength
    );
    assert!(statement.contains(&format!("'{expected_json}'::jsonb")));
    assert!(statement.contains(&format!("'{PACKAGE_INSERT_PROCEDURE}'")));
    assert!(statement.contains("'approved'"));
    assert!(statement.contains(&format!("'{}', 1,", record.id)));
    assert!(statement.contains("'2025-06-01T12:30:00.000000Z'"));
}

#[test]
fn statements_cover_every_record_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut records = Vec::new();
    for index in 1..=6 {
        records.push(build_commercial(index, &ctx(), &mut rng));
    }
    for index in 1..=4 {
        records.push(build_compounding(index, &ctx(), &mut rng));
    }

    let sql = render(&records);
    assert!(sql.starts_with("-- SQL insert statements for products and formulations (Postgres)\n"));
    assert!(sql.contains("-- Generated on: 2025-06-01T12:30:00.000000Z"));
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS products ("));
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS formulations ("));
    assert!(sql.contains("review_status TEXT DEFAULT 'pending'"));

    let (products, formulations) = verify_statements(&records, &sql).expect("statements match");
    assert_eq!(products, 10);
    assert_eq!(formulations, 10);
    assert_eq!(sql.matches("'approved'").count(), 6);
    assert_eq!(sql.matches(", 'pending', ").count(), 4);
}

#[test]
fn verify_statements_detects_missing_insert() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let records = vec![
        build_commercial(1, &ctx(), &mut rng),
        build_commercial(2, &ctx(), &mut rng),
    ];
    let sql = render(&records[..1]);

    assert!(verify_statements(&records, &sql).is_err());
}
