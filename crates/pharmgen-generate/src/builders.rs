use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use pharmgen_core::vocabulary::{self, CompoundingIngredient};
use pharmgen_core::{
    Amount, CommercialProduct, CompoundingProduct, Formulation, IngredientLine, IngredientRole,
    MAX_INGREDIENT_LINES, MIN_INGREDIENT_LINES, ProductKind, ProductRecord,
};

/// Per-run values shared by every builder call.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext {
    pub created_at: DateTime<Utc>,
}

impl BuildContext {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self { created_at }
    }
}

/// Build the commercial record for a 1-based sequence index.
pub fn build_commercial<R: Rng + ?Sized>(
    index: u32,
    ctx: &BuildContext,
    rng: &mut R,
) -> ProductRecord {
    let id = random_uuid(rng);
    let product = CommercialProduct {
        category: pick(vocabulary::CATEGORIES, rng).to_string(),
        dosage_form: pick(vocabulary::COMMERCIAL_DOSAGE_FORMS, rng).to_string(),
        active_ingredient: pick(vocabulary::ACTIVE_INGREDIENTS, rng).to_string(),
        strength: *pick(vocabulary::STRENGTHS, rng),
        manufacturer: pick(vocabulary::MANUFACTURERS, rng).to_string(),
        country: pick(vocabulary::COUNTRIES, rng).to_string(),
    };

    ProductRecord {
        id,
        name_ar: format!("{} {index}", vocabulary::COMMERCIAL_NAME_AR),
        name_en: format!("{} {index}", vocabulary::COMMERCIAL_NAME_EN),
        kind: ProductKind::Commercial(product),
        notes: vocabulary::COMMERCIAL_NOTES.to_string(),
        created_at: ctx.created_at,
    }
}

/// Build the compounding record for a 1-based sequence index.
pub fn build_compounding<R: Rng + ?Sized>(
    index: u32,
    ctx: &BuildContext,
    rng: &mut R,
) -> ProductRecord {
    let id = random_uuid(rng);
    let category = pick(vocabulary::CATEGORIES, rng).to_string();
    let dosage_form = pick(vocabulary::COMPOUNDING_DOSAGE_FORMS, rng).to_string();

    let count = rng.random_range(MIN_INGREDIENT_LINES..=MAX_INGREDIENT_LINES);
    let ingredients: Vec<IngredientLine> = (0..count)
        .map(|_| {
            let ingredient = pick(vocabulary::COMPOUNDING_INGREDIENTS, rng);
            ingredient_line(ingredient, rng)
        })
        .collect();
    let procedure = render_procedure(&ingredients);

    ProductRecord {
        id,
        name_ar: format!("{} {index}", vocabulary::COMPOUNDING_NAME_AR),
        name_en: format!("{} {index}", vocabulary::COMPOUNDING_NAME_EN),
        kind: ProductKind::Compounding(CompoundingProduct {
            category,
            dosage_form,
            formulation: Formulation {
                ingredients,
                procedure,
            },
            manufacturer: None,
            country: None,
        }),
        notes: vocabulary::COMPOUNDING_NOTES.to_string(),
        created_at: ctx.created_at,
    }
}

/// Render the 6-step compounding procedure. Step 2 lists every line as
/// `name (amount)`, comma separated, in formulation order.
pub fn render_procedure(lines: &[IngredientLine]) -> String {
    let weighed = lines
        .iter()
        .map(|line| format!("{} ({})", line.name, line.amount))
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = String::new();
    text.push_str(vocabulary::PROCEDURE_STEP_1);
    text.push('\n');
    text.push_str(vocabulary::PROCEDURE_STEP_2_PREFIX);
    text.push_str(&weighed);
    text.push_str(".\n");
    for step in vocabulary::PROCEDURE_TAIL {
        text.push_str(step);
        text.push('\n');
    }
    text
}

fn ingredient_line<R: Rng + ?Sized>(
    ingredient: &CompoundingIngredient,
    rng: &mut R,
) -> IngredientLine {
    let value = *pick(vocabulary::amount_pool(ingredient.unit), rng);
    let role = *pick(&IngredientRole::ALL, rng);
    IngredientLine {
        name: ingredient.name.to_string(),
        amount: Amount::new(value, ingredient.unit),
        role,
    }
}

/// Random v4 identifier drawn from the caller's stream.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

fn pick<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> &'a T {
    &values[rng.random_range(0..values.len())]
}
