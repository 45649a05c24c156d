use crate::domain::{
    food::entities::FoodItem, patient::entities::PatientProfile,
};

const DEFAULT_MEAL_TYPE: &str = "General";
const DEFAULT_TIME_OF_DAY: &str = "Any";

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

/// One catalog line, e.g. `Ghee (oil): Rasa: Madhura, Dosha effects: VD PD KI`.
pub fn render_food_line(food: &FoodItem) -> String {
    let rasa = food
        .ayurvedic
        .rasa
        .iter()
        .map(|rasa| rasa.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} ({}): Rasa: {}, Dosha effects: {}",
        food.name,
        food.category,
        rasa,
        food.ayurvedic.dosha_effect.code()
    )
}

pub fn build_recommendation_prompt(profile: &PatientProfile, foods: &[FoodItem]) -> String {
    let food_list = foods
        .iter()
        .map(render_food_line)
        .collect::<Vec<_>>()
        .join("\n");
    let prakriti = &profile.prakriti;

    format!(
        r#"You are an expert Ayurvedic dietitian. Analyze the patient profile and provide personalized dietary recommendations.

Patient Profile:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Dominant Dosha: {dominant}
- Dosha Distribution: Vata {vata}%, Pitta {pitta}%, Kapha {kapha}%
- Current Conditions: {conditions}
- Allergies: {allergies}
- Dietary Restrictions: {restrictions}

Available Foods in Database:
{food_list}

Based on this patient's Prakriti and conditions, provide:

1. RECOMMENDED FOODS (5-7 foods from the database above that would balance their dosha)
2. FOODS TO AVOID (3-5 foods from the database that might aggravate their dosha)
3. DIETARY GUIDELINES (5-7 specific actionable guidelines for this patient)
4. LIFESTYLE RECOMMENDATIONS (3-4 Ayurvedic lifestyle tips)

Format your response as JSON with this structure:
{{
  "recommendedFoods": ["food1", "food2", ...],
  "foodsToAvoid": ["food1", "food2", ...],
  "dietaryGuidelines": ["guideline1", "guideline2", ...],
  "lifestyleRecommendations": ["tip1", "tip2", ...]
}}

Only include foods that exist in the database above. Be specific and practical."#,
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        dominant = prakriti.dominant_dosha,
        vata = prakriti.vata,
        pitta = prakriti.pitta,
        kapha = prakriti.kapha,
        conditions = join_or_none(&profile.current_conditions),
        allergies = join_or_none(&profile.allergies),
        restrictions = join_or_none(&profile.dietary_restrictions),
        food_list = food_list,
    )
}

/// Meal-scoped prompt. It carries no catalog, so answers are free text.
pub fn build_meal_prompt(
    profile: &PatientProfile,
    meal_type: Option<&str>,
    time_of_day: Option<&str>,
) -> String {
    let prakriti = &profile.prakriti;
    let meal_type = meal_type
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_MEAL_TYPE);
    let time_of_day = time_of_day
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_TIME_OF_DAY);

    format!(
        r#"As an expert Ayurvedic dietitian, provide personalized meal recommendations for a patient with the following profile:

Patient Profile:
- Dominant Dosha: {dominant}
- Dosha Balance: Vata {vata}%, Pitta {pitta}%, Kapha {kapha}%
- Current Conditions: {conditions}
- Allergies: {allergies}
- Dietary Restrictions: {restrictions}

Meal Context:
- Meal Type: {meal_type}
- Time of Day: {time_of_day}

Please provide:
1. 5-7 specific food recommendations suitable for this meal
2. Foods to avoid for this meal
3. Cooking methods and preparation tips
4. Timing and portion guidance
5. Ayurvedic principles to follow

Format as JSON with keys: recommendedFoods (array), avoidFoods (array), cookingTips (array), timingGuidance (string), ayurvedicPrinciples (array)"#,
        dominant = prakriti.dominant_dosha,
        vata = prakriti.vata,
        pitta = prakriti.pitta,
        kapha = prakriti.kapha,
        conditions = join_or_none(&profile.current_conditions),
        allergies = join_or_none(&profile.allergies),
        restrictions = join_or_none(&profile.dietary_restrictions),
        meal_type = meal_type,
        time_of_day = time_of_day,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        food::entities::{
            AyurvedicProperties, DoshaEffect, DoshaEffectLevel, FoodCategory, FoodConfig, Guna,
            NutritionalInfo, Rasa, Vipaka, Virya,
        },
        patient::entities::{Gender, Prakriti},
    };
    use proptest::prelude::*;

    fn profile() -> PatientProfile {
        PatientProfile {
            name: "Asha Rao".to_string(),
            age: 34,
            gender: Gender::Female,
            prakriti: Prakriti::new(50, 30, 20),
            current_conditions: vec![],
            allergies: vec![],
            dietary_restrictions: vec![],
        }
    }

    fn food(name: &str, category: FoodCategory, rasa: Vec<Rasa>) -> FoodItem {
        FoodItem::new(FoodConfig {
            name: name.to_string(),
            category,
            ayurvedic: AyurvedicProperties {
                rasa,
                guna: vec![Guna::Snigdha],
                virya: Virya::Sheeta,
                vipaka: Vipaka::Madhura,
                dosha_effect: DoshaEffect {
                    vata: DoshaEffectLevel::Decreases,
                    pitta: DoshaEffectLevel::Decreases,
                    kapha: DoshaEffectLevel::Increases,
                },
            },
            nutritional: NutritionalInfo {
                calories: 100.0,
                protein: 1.0,
                carbs: 1.0,
                fat: 1.0,
                fiber: 0.0,
                vitamins: None,
                minerals: None,
            },
            serving_size: "1 cup".to_string(),
            notes: None,
        })
    }

    #[test]
    fn catalog_line_uses_compact_dosha_code() {
        let ghee = food("Ghee", FoodCategory::Oil, vec![Rasa::Madhura]);

        assert_eq!(
            render_food_line(&ghee),
            "Ghee (oil): Rasa: Madhura, Dosha effects: VD PD KI"
        );
    }

    #[test]
    fn prompt_lists_every_catalog_food() {
        let foods = vec![
            food("Basmati Rice", FoodCategory::Grain, vec![Rasa::Madhura]),
            food("Ginger", FoodCategory::Spice, vec![Rasa::Katu]),
            food("Moong Dal", FoodCategory::Legume, vec![Rasa::Madhura, Rasa::Kashaya]),
        ];

        let prompt = build_recommendation_prompt(&profile(), &foods);

        for food in &foods {
            assert!(prompt.contains(&food.name), "missing {}", food.name);
        }
        assert!(prompt.contains("Moong Dal (legume): Rasa: Madhura, Kashaya"));
    }

    #[test]
    fn empty_lists_render_as_none() {
        let prompt = build_recommendation_prompt(&profile(), &[]);

        assert!(prompt.contains("- Current Conditions: None"));
        assert!(prompt.contains("- Allergies: None"));
        assert!(prompt.contains("- Dietary Restrictions: None"));
    }

    #[test]
    fn profile_fields_are_restated() {
        let mut profile = profile();
        profile.allergies = vec!["Peanuts".to_string(), "Shellfish".to_string()];

        let prompt = build_recommendation_prompt(&profile, &[]);

        assert!(prompt.contains("- Name: Asha Rao"));
        assert!(prompt.contains("- Gender: female"));
        assert!(prompt.contains("- Dominant Dosha: Vata"));
        assert!(prompt.contains("Vata 50%, Pitta 30%, Kapha 20%"));
        assert!(prompt.contains("- Allergies: Peanuts, Shellfish"));
        assert!(prompt.contains("\"lifestyleRecommendations\": [\"tip1\", \"tip2\", ...]"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let foods = vec![food("Ghee", FoodCategory::Oil, vec![Rasa::Madhura])];

        assert_eq!(
            build_recommendation_prompt(&profile(), &foods),
            build_recommendation_prompt(&profile(), &foods)
        );
    }

    #[test]
    fn meal_prompt_defaults_missing_context() {
        let prompt = build_meal_prompt(&profile(), None, None);

        assert!(prompt.contains("- Meal Type: General"));
        assert!(prompt.contains("- Time of Day: Any"));

        let prompt = build_meal_prompt(&profile(), Some("Dinner"), Some("19:00"));

        assert!(prompt.contains("- Meal Type: Dinner"));
        assert!(prompt.contains("- Time of Day: 19:00"));
    }

    fn profile_strategy() -> impl Strategy<Value = PatientProfile> {
        (
            "[A-Za-z][A-Za-z ]{0,24}",
            0u16..=150,
            prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)],
            0u8..=100,
            0u8..=100,
            0u8..=100,
        )
            .prop_map(|(name, age, gender, vata, pitta, kapha)| PatientProfile {
                name,
                age,
                gender,
                prakriti: Prakriti::new(vata, pitta, kapha),
                current_conditions: vec![],
                allergies: vec![],
                dietary_restrictions: vec![],
            })
    }

    fn category_strategy() -> impl Strategy<Value = FoodCategory> {
        prop_oneof![
            Just(FoodCategory::Grain),
            Just(FoodCategory::Vegetable),
            Just(FoodCategory::Fruit),
            Just(FoodCategory::Spice),
            Just(FoodCategory::Dairy),
        ]
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<FoodItem>> {
        prop::collection::vec(
            ("[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?", category_strategy()),
            1..25,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, category)| food(&name, category, vec![Rasa::Madhura]))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn any_catalog_is_fully_listed(profile in profile_strategy(), foods in catalog_strategy()) {
            let prompt = build_recommendation_prompt(&profile, &foods);

            for food in &foods {
                prop_assert!(prompt.contains(&render_food_line(food)));
            }
            let header = format!("- Dominant Dosha: {}", profile.prakriti.dominant_dosha);
            prop_assert!(prompt.contains(&header));
        }

        #[test]
        fn empty_profile_lists_always_read_none(
            profile in profile_strategy(),
            foods in catalog_strategy(),
            meal_type in proptest::option::of("[A-Z][a-z]{3,9}"),
        ) {
            let prompt = build_recommendation_prompt(&profile, &foods);
            let meal_prompt = build_meal_prompt(&profile, meal_type.as_deref(), None);

            for rendered in [&prompt, &meal_prompt] {
                prop_assert!(rendered.contains("- Current Conditions: None"));
                prop_assert!(rendered.contains("- Allergies: None"));
                prop_assert!(rendered.contains("- Dietary Restrictions: None"));
            }
        }
    }
}
