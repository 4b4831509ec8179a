//! Fixed sampling pools. Every pool is non-empty, so uniform sampling from
//! them cannot fail.

use crate::units::{Amount, Unit};

pub const CATEGORIES: &[&str] = &[
    "جلدية",
    "تنفسية",
    "هضمية",
    "أطفال",
    "مسكنات",
    "مضادات حيوية",
    "فيتامينات",
    "مستحضرات عينية",
    "أذنية",
    "نسائية",
    "قلبية",
    "أوردية",
    "غسيل فم",
    "مضادات احتقان",
    "مضادات فطريات",
];

pub const COMMERCIAL_DOSAGE_FORMS: &[&str] = &[
    "سيروب",
    "مرهم",
    "كريم",
    "كبسولة",
    "قرص",
    "محلول للحقن",
    "قطرة",
    "جل",
    "بخاخ",
    "معجون أسنان",
    "لبوس",
];

pub const COMPOUNDING_DOSAGE_FORMS: &[&str] = &[
    "سيروب", "مرهم", "كريم", "محلول", "كبسولة", "جل", "قطرة", "لبوس",
];

pub const MANUFACTURERS: &[&str] = &[
    "شركة الأمل",
    "مجموعة الشفاء",
    "شركة الحياة",
    "مصنع النور",
    "شركة الطب العربي",
    "MediLab",
    "PharmaCo",
];

pub const COUNTRIES: &[&str] = &[
    "العراق",
    "مصر",
    "السعودية",
    "الأردن",
    "تركيا",
    "الهند",
    "الصين",
];

pub const ACTIVE_INGREDIENTS: &[&str] = &[
    "Paracetamol",
    "Amoxicillin",
    "Ibuprofen",
    "Cetirizine",
    "Omeprazole",
    "Metformin",
    "Atorvastatin",
    "Azithromycin",
];

pub const STRENGTHS: &[Amount] = &[
    Amount::new(500.0, Unit::Milligram),
    Amount::new(250.0, Unit::Milligram),
    Amount::new(5.0, Unit::MilligramPerMillilitre),
    Amount::new(100.0, Unit::Milligram),
    Amount::new(20.0, Unit::Milligram),
    Amount::new(50.0, Unit::Milligram),
    Amount::new(10.0, Unit::MilligramPerMillilitre),
];

/// Ingredient available to compounding formulations, with its dosing unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundingIngredient {
    pub name: &'static str,
    pub unit: Unit,
}

const fn ingredient(name: &'static str, unit: Unit) -> CompoundingIngredient {
    CompoundingIngredient { name, unit }
}

pub const COMPOUNDING_INGREDIENTS: &[CompoundingIngredient] = &[
    ingredient("Paracetamol", Unit::Milligram),
    ingredient("Amoxicillin", Unit::Milligram),
    ingredient("Glycerin", Unit::Millilitre),
    ingredient("Purified Water", Unit::Millilitre),
    ingredient("Hydrophilic Ointment Base", Unit::Gram),
    ingredient("Cetirizine", Unit::Milligram),
    ingredient("Xanthan Gum", Unit::Gram),
    ingredient("Propylene Glycol", Unit::Millilitre),
    ingredient("Carbopol", Unit::Gram),
    ingredient("Lidocaine", Unit::Milligram),
    ingredient("Mupirocin", Unit::PercentWeight),
    ingredient("Ketoconazole", Unit::PercentWeight),
];

pub const MILLIGRAM_AMOUNTS: &[f64] = &[50.0, 100.0, 250.0, 500.0];
pub const MILLILITRE_AMOUNTS: &[f64] = &[1.0, 5.0, 10.0, 20.0, 50.0, 100.0];
pub const GRAM_AMOUNTS: &[f64] = &[0.5, 1.0, 5.0, 10.0, 25.0, 50.0];

/// Numeric pool an amount in `unit` is drawn from.
///
/// `% w/w` shares the gram pool.
pub fn amount_pool(unit: Unit) -> &'static [f64] {
    match unit {
        Unit::Milligram | Unit::MilligramPerMillilitre => MILLIGRAM_AMOUNTS,
        Unit::Millilitre => MILLILITRE_AMOUNTS,
        Unit::Gram | Unit::PercentWeight => GRAM_AMOUNTS,
    }
}

pub const COMMERCIAL_NAME_AR: &str = "دواء تجاري";
pub const COMMERCIAL_NAME_EN: &str = "CommercialMed";
pub const COMPOUNDING_NAME_AR: &str = "تركيبة تركيبية";
pub const COMPOUNDING_NAME_EN: &str = "CompoundFormula";

pub const COMMERCIAL_NOTES: &str = "معلومات مرجعية. يجب مراجعة التعليمات الرسمية للمنتج.";
pub const COMPOUNDING_NOTES: &str =
    "هذه صيغة تركيبية نموذجية — يجب مراجعتها واعتمادها من صيدلي مرخّص.";

/// Procedure stored for commercial products: see the official package insert.
pub const PACKAGE_INSERT_PROCEDURE: &str = "انظر نشرة المنتج الرسمية.";

/// Compounding procedure steps; step 2 is completed with the weighed
/// ingredient list.
pub const PROCEDURE_STEP_1: &str = "1. تعقيم الأدوات ومنطقة العمل.";
pub const PROCEDURE_STEP_2_PREFIX: &str = "2. وزن وقياس المكونات: ";
pub const PROCEDURE_TAIL: &[&str] = &[
    "3. إذابة المكونات الذائبة في الجزء المناسب من المذيب.",
    "4. إضافة المواد المساعدة مع التحريك حتى التجانس.",
    "5. تعديل pH إن لزم وتعبئة المنتج في الحاوية المناسبة.",
    "6. وسم المنتج بتاريخ التحضير والمرجع.",
];
