//! Printable and spreadsheet renderings of a diet plan.

use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::NaiveDate;
use minijinja::Environment;
use serde::Serialize;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::DietPlan,
        helpers::{NutritionTotals, index_foods},
    },
    food::entities::FoodItem,
    patient::entities::Patient,
};

const APP_TITLE: &str = "AyurDiet Cloud";

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// File name offered for download, e.g. `diet-plan-Asha-Rao.csv`.
pub fn export_filename(patient: &Patient, extension: &str) -> String {
    let name = patient.name.split_whitespace().collect::<Vec<_>>().join("-");
    format!("diet-plan-{}.{}", name, extension)
}

/// Flattens the plan into one row per meal item. Meal name and time are only
/// written on the first row of each meal; items whose food is missing from
/// `foods` are left out.
pub fn generate_diet_plan_csv(plan: &DietPlan, patient: &Patient, foods: &[FoodItem]) -> String {
    let index = index_foods(foods);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{} - Diet Plan Export", APP_TITLE));
    lines.push(String::new());
    lines.push(format!("Patient Name,{}", csv_field(&patient.name)));
    lines.push(format!("Age,{}", patient.age));
    lines.push(format!("Dominant Dosha,{}", patient.prakriti.dominant_dosha));
    lines.push(format!("Plan Duration,{} days", plan.duration));
    lines.push(format!("Created Date,{}", plan.created_at.format("%Y-%m-%d")));
    lines.push(String::new());

    lines.push("MEAL PLAN".to_string());
    lines.push(
        "Meal,Time,Food Item,Quantity,Unit,Calories,Protein (g),Carbs (g),Fat (g)".to_string(),
    );

    for meal in &plan.meals {
        for (position, item) in meal.items.iter().enumerate() {
            let Some(food) = index.get(&item.food_id) else {
                continue;
            };
            let (meal_name, meal_time) = if position == 0 {
                (meal.name.as_str(), meal.time.as_str())
            } else {
                ("", "")
            };
            let nutrition = NutritionTotals::for_item(food, item);

            lines.push(format!(
                "{},{},{},{},{},{},{},{},{}",
                csv_field(meal_name),
                csv_field(meal_time),
                csv_field(&food.name),
                item.quantity,
                csv_field(&item.unit),
                nutrition.calories,
                nutrition.protein,
                nutrition.carbs,
                nutrition.fat,
            ));
        }
    }

    lines.push(String::new());

    if !plan.guidelines.is_empty() {
        lines.push("DIETARY GUIDELINES".to_string());
        for (index, guideline) in plan.guidelines.iter().enumerate() {
            lines.push(format!("{},{}", index + 1, csv_field(guideline)));
        }
        lines.push(String::new());
    }

    if !plan.restrictions.is_empty() {
        lines.push("RESTRICTIONS".to_string());
        for (index, restriction) in plan.restrictions.iter().enumerate() {
            lines.push(format!("{},{}", index + 1, csv_field(restriction)));
        }
        lines.push(String::new());
    }

    if let Some(notes) = plan.notes.as_deref().filter(|notes| !notes.is_empty()) {
        lines.push("NOTES".to_string());
        lines.push(csv_field(notes).into_owned());
    }

    lines.join("\n")
}

const DIET_PLAN_TEMPLATE: &str = include_str!("templates/diet_plan.html");

/// Auto-escaping is keyed on the template name, so the document is always
/// rendered under an `.html` name.
static ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(Debug, Serialize)]
struct InfoView {
    label: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct ItemView<'a> {
    name: &'a str,
    quantity: String,
    unit: &'a str,
    serving_size: &'a str,
    calories: String,
    protein: String,
    carbs: String,
    fat: String,
}

#[derive(Debug, Serialize)]
struct MealView<'a> {
    name: &'a str,
    time: &'a str,
    items: Vec<ItemView<'a>>,
}

#[derive(Debug, Serialize)]
struct DocumentView<'a> {
    app_title: &'static str,
    patient_name: &'a str,
    patient_info: Vec<InfoView>,
    meals: Vec<MealView<'a>>,
    guidelines: &'a [String],
    restrictions: &'a [String],
    notes: Option<&'a str>,
    generated_on: String,
}

/// Standalone printable page. Per-item nutrition is rounded to whole units.
/// Numbers are formatted before rendering so they read the same as in the CSV.
pub fn generate_diet_plan_html(
    plan: &DietPlan,
    patient: &Patient,
    foods: &[FoodItem],
    generated_on: NaiveDate,
) -> Result<String, CoreError> {
    let index = index_foods(foods);
    let prakriti = &patient.prakriti;

    let patient_info = vec![
        InfoView {
            label: "Name",
            value: patient.name.clone(),
        },
        InfoView {
            label: "Age",
            value: format!("{} years", patient.age),
        },
        InfoView {
            label: "Dominant Dosha",
            value: prakriti.dominant_dosha.to_string(),
        },
        InfoView {
            label: "Plan Duration",
            value: format!("{} days", plan.duration),
        },
        InfoView {
            label: "Created Date",
            value: plan.created_at.format("%Y-%m-%d").to_string(),
        },
        InfoView {
            label: "Dosha Distribution",
            value: format!(
                "V: {}% | P: {}% | K: {}%",
                prakriti.vata, prakriti.pitta, prakriti.kapha
            ),
        },
    ];

    let meals = plan
        .meals
        .iter()
        .map(|meal| MealView {
            name: &meal.name,
            time: &meal.time,
            items: meal
                .items
                .iter()
                .filter_map(|item| {
                    let food = index.get(&item.food_id)?;
                    let nutrition = NutritionTotals::for_item(food, item).rounded();
                    Some(ItemView {
                        name: &food.name,
                        quantity: item.quantity.to_string(),
                        unit: &item.unit,
                        serving_size: &food.serving_size,
                        calories: nutrition.calories.to_string(),
                        protein: nutrition.protein.to_string(),
                        carbs: nutrition.carbs.to_string(),
                        fat: nutrition.fat.to_string(),
                    })
                })
                .collect(),
        })
        .collect();

    let document = DocumentView {
        app_title: APP_TITLE,
        patient_name: &patient.name,
        patient_info,
        meals,
        guidelines: &plan.guidelines,
        restrictions: &plan.restrictions,
        notes: plan.notes.as_deref().filter(|notes| !notes.is_empty()),
        generated_on: generated_on.format("%Y-%m-%d").to_string(),
    };

    let env = ENV.get_or_init(Environment::new);

    env.render_named_str("diet_plan.html", DIET_PLAN_TEMPLATE, &document)
        .map_err(|err| {
            error!("failed to render diet plan document: {}", err);
            CoreError::InternalServerError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{
        diet_plan::entities::{Meal, MealItem},
        food::entities::{
            AyurvedicProperties, DoshaEffect, DoshaEffectLevel, FoodCategory, FoodConfig,
            NutritionalInfo, Rasa, Vipaka, Virya,
        },
        patient::entities::{Gender, PatientConfig, Prakriti},
    };

    fn food(name: &str, calories: f64) -> FoodItem {
        FoodItem::new(FoodConfig {
            name: name.to_string(),
            category: FoodCategory::Grain,
            ayurvedic: AyurvedicProperties {
                rasa: vec![Rasa::Madhura],
                guna: vec![],
                virya: Virya::Sheeta,
                vipaka: Vipaka::Madhura,
                dosha_effect: DoshaEffect {
                    vata: DoshaEffectLevel::Decreases,
                    pitta: DoshaEffectLevel::Decreases,
                    kapha: DoshaEffectLevel::Increases,
                },
            },
            nutritional: NutritionalInfo {
                calories,
                protein: 4.5,
                carbs: 45.0,
                fat: 0.5,
                fiber: 0.6,
                vitamins: None,
                minerals: None,
            },
            serving_size: "1 cup cooked".to_string(),
            notes: None,
        })
    }

    fn fixture() -> (DietPlan, Patient, Vec<FoodItem>) {
        let rice = food("Basmati Rice", 205.0);
        let dal = food("Moong Dal", 212.0);
        let patient = Patient::new(PatientConfig {
            name: "Asha  Rao".to_string(),
            age: 34,
            gender: Gender::Female,
            contact: "asha@example.com".to_string(),
            prakriti: Prakriti::new(20, 60, 20),
            current_conditions: vec![],
            allergies: vec![],
            dietary_restrictions: vec![],
            last_visit: None,
        });
        let plan = DietPlan {
            id: crate::domain::common::generate_uuid_v7(),
            patient_id: patient.id,
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
            duration: 7,
            meals: vec![Meal {
                id: crate::domain::common::generate_uuid_v7(),
                name: "Lunch".to_string(),
                time: "12:30".to_string(),
                items: vec![
                    MealItem {
                        food_id: rice.id,
                        quantity: 1.5,
                        unit: "cup".to_string(),
                        notes: None,
                    },
                    MealItem {
                        food_id: dal.id,
                        quantity: 1.0,
                        unit: "bowl".to_string(),
                        notes: None,
                    },
                ],
            }],
            guidelines: vec!["Eat warm, freshly cooked meals".to_string()],
            restrictions: vec![],
            notes: Some("Review in <2> weeks".to_string()),
        };

        (plan, patient, vec![rice, dal])
    }

    #[test]
    fn csv_lists_meal_name_only_on_first_row() {
        let (plan, patient, foods) = fixture();

        let csv = generate_diet_plan_csv(&plan, &patient, &foods);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "AyurDiet Cloud - Diet Plan Export");
        assert!(lines.contains(&"Dominant Dosha,Pitta"));
        assert!(lines.contains(&"Created Date,2026-03-14"));
        assert!(lines.contains(&"Lunch,12:30,Basmati Rice,1.5,cup,307.5,6.75,67.5,0.75"));
        assert!(lines.contains(&",,Moong Dal,1,bowl,212,4.5,45,0.5"));
    }

    #[test]
    fn csv_quotes_fields_with_commas_and_numbers_guidelines() {
        let (plan, patient, foods) = fixture();

        let csv = generate_diet_plan_csv(&plan, &patient, &foods);

        assert!(csv.contains("DIETARY GUIDELINES\n1,\"Eat warm, freshly cooked meals\""));
        assert!(!csv.contains("RESTRICTIONS"));
        assert!(csv.ends_with("NOTES\nReview in <2> weeks"));
    }

    #[test]
    fn csv_skips_items_with_unknown_foods() {
        let (plan, patient, foods) = fixture();

        let csv = generate_diet_plan_csv(&plan, &patient, &foods[..1]);

        assert!(!csv.contains("Moong Dal"));
    }

    #[test]
    fn html_rounds_nutrition_and_escapes_text() {
        let (plan, patient, foods) = fixture();
        let generated_on = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

        let html = generate_diet_plan_html(&plan, &patient, &foods, generated_on).unwrap();

        assert!(html.contains("<span>Calories: 308</span>"));
        assert!(html.contains("V: 20% | P: 60% | K: 20%"));
        assert!(html.contains("Review in &lt;2&gt; weeks"));
        assert!(html.contains("Generated by AyurDiet Cloud on 2026-03-15"));
        assert!(!html.contains("<h2>Restrictions</h2>"));
    }

    #[test]
    fn html_escapes_every_interpolated_field() {
        let (mut plan, mut patient, foods) = fixture();
        patient.name = "<script>alert(1)</script>".to_string();
        plan.meals[0].name = "Lunch & Tea".to_string();
        plan.restrictions = vec!["No \"cold\" drinks".to_string()];
        let generated_on = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

        let html = generate_diet_plan_html(&plan, &patient, &foods, generated_on).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Lunch &amp; Tea"));
        assert!(html.contains("No &quot;cold&quot; drinks"));
        assert!(html.contains("<h2>Restrictions</h2>"));
    }

    #[test]
    fn filename_collapses_whitespace() {
        let (_, patient, _) = fixture();

        assert_eq!(export_filename(&patient, "csv"), "diet-plan-Asha-Rao.csv");
    }
}
