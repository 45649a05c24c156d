use crate::domain::recommendation::entities::{MealRecommendation, Recommendation};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Static advice returned whenever the model cannot produce a usable answer.
pub fn default_recommendation() -> Recommendation {
    Recommendation {
        recommended_foods: strings(&["Basmati Rice", "Moong Dal", "Ghee", "Ginger", "Turmeric"]),
        foods_to_avoid: strings(&["Heavy fried foods", "Excessive cold foods"]),
        dietary_guidelines: strings(&[
            "Eat warm, freshly cooked meals",
            "Include all six tastes in your diet",
            "Avoid eating late at night",
            "Stay hydrated with warm water",
            "Practice mindful eating",
        ]),
        lifestyle_recommendations: strings(&[
            "Maintain regular meal times",
            "Practice yoga or gentle exercise",
            "Get adequate sleep (7-8 hours)",
            "Manage stress through meditation",
        ]),
    }
}

fn breakfast() -> MealRecommendation {
    MealRecommendation {
        recommended_foods: strings(&[
            "Oatmeal with ghee",
            "Fresh fruits",
            "Herbal tea",
            "Nuts and seeds",
            "Warm milk",
        ]),
        avoid_foods: strings(&["Heavy fried foods", "Cold cereals", "Leftover food"]),
        cooking_tips: strings(&["Cook fresh", "Add warming spices", "Use ghee for cooking"]),
        timing_guidance: "Eat between 7-9 AM when digestive fire is building".to_string(),
        ayurvedic_principles: strings(&[
            "Start with warm foods",
            "Include all six tastes",
            "Eat mindfully",
        ]),
    }
}

fn lunch() -> MealRecommendation {
    MealRecommendation {
        recommended_foods: strings(&[
            "Basmati rice",
            "Dal",
            "Vegetables",
            "Chapati",
            "Yogurt",
            "Salad",
        ]),
        avoid_foods: strings(&["Heavy desserts", "Excessive raw foods"]),
        cooking_tips: strings(&["Use balanced spices", "Include variety", "Cook with love"]),
        timing_guidance: "Eat between 12-2 PM when digestive fire is strongest".to_string(),
        ayurvedic_principles: strings(&[
            "Make lunch the largest meal",
            "Include protein and grains",
            "Sit while eating",
        ]),
    }
}

fn dinner() -> MealRecommendation {
    MealRecommendation {
        recommended_foods: strings(&[
            "Light soup",
            "Steamed vegetables",
            "Small portion of grains",
            "Herbal tea",
        ]),
        avoid_foods: strings(&["Heavy meats", "Yogurt", "Cheese", "Fried foods"]),
        cooking_tips: strings(&["Keep it light", "Avoid heavy spices", "Cook thoroughly"]),
        timing_guidance: "Eat before 7 PM, at least 3 hours before sleep".to_string(),
        ayurvedic_principles: strings(&[
            "Light and easy to digest",
            "Avoid curd at night",
            "Early dinner",
        ]),
    }
}

/// Meal names match exactly as the dashboard sends them. Anything else,
/// including no meal type at all, gets the lunch set.
pub fn default_meal_recommendation(meal_type: Option<&str>) -> MealRecommendation {
    match meal_type {
        Some("Breakfast") => breakfast(),
        Some("Dinner") => dinner(),
        _ => lunch(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_default_is_stable() {
        let first = serde_json::to_string(&default_recommendation()).unwrap();
        let second = serde_json::to_string(&default_recommendation()).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with(
            r#"{"recommendedFoods":["Basmati Rice","Moong Dal","Ghee","Ginger","Turmeric"]"#
        ));
    }

    #[test]
    fn breakfast_and_dinner_have_their_own_sets() {
        let breakfast = default_meal_recommendation(Some("Breakfast"));
        let dinner = default_meal_recommendation(Some("Dinner"));

        assert_eq!(breakfast.recommended_foods[0], "Oatmeal with ghee");
        assert_eq!(dinner.recommended_foods[0], "Light soup");
        assert_ne!(breakfast, dinner);
    }

    #[test]
    fn unknown_meal_types_use_lunch() {
        let lunch = default_meal_recommendation(Some("Lunch"));

        assert_eq!(default_meal_recommendation(Some("Brunch")), lunch);
        assert_eq!(default_meal_recommendation(Some("breakfast")), lunch);
        assert_eq!(default_meal_recommendation(None), lunch);
    }
}
