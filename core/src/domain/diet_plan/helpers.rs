use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    diet_plan::entities::{MealItem, Meal},
    food::entities::FoodItem,
    patient::entities::Dosha,
};

/// Looks foods up by id; items whose food is missing are skipped by every
/// computation below.
pub fn index_foods(foods: &[FoodItem]) -> HashMap<Uuid, &FoodItem> {
    foods.iter().map(|food| (food.id, food)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    /// Per-serving values scaled by the item quantity.
    pub fn for_item(food: &FoodItem, item: &MealItem) -> Self {
        Self {
            calories: food.nutritional.calories * item.quantity,
            protein: food.nutritional.protein * item.quantity,
            carbs: food.nutritional.carbs * item.quantity,
            fat: food.nutritional.fat * item.quantity,
        }
    }

    pub fn add(&mut self, other: NutritionTotals) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }

    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fat: self.fat.round(),
        }
    }
}

pub fn calculate_nutrition_totals(meals: &[Meal], foods: &[FoodItem]) -> NutritionTotals {
    let index = index_foods(foods);
    let mut totals = NutritionTotals::default();

    for item in meals.iter().flat_map(|meal| meal.items.iter()) {
        if let Some(food) = index.get(&item.food_id) {
            totals.add(NutritionTotals::for_item(food, item));
        }
    }

    totals
}

/// Net effect of a set of meals on each dosha. Positive means the meals
/// aggravate that dosha, negative means they pacify it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoshaBalance {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
    pub aggravated_doshas: Vec<Dosha>,
}

impl DoshaBalance {
    pub fn net(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn aggravates(&self, dosha: Dosha) -> bool {
        self.net(dosha) > 0.0
    }
}

pub fn calculate_dosha_balance(meals: &[Meal], foods: &[FoodItem]) -> DoshaBalance {
    let index = index_foods(foods);
    let mut balance = DoshaBalance::default();

    for item in meals.iter().flat_map(|meal| meal.items.iter()) {
        let Some(food) = index.get(&item.food_id) else {
            continue;
        };
        let effect = &food.ayurvedic.dosha_effect;
        balance.vata += effect.vata.weight() * item.quantity;
        balance.pitta += effect.pitta.weight() * item.quantity;
        balance.kapha += effect.kapha.weight() * item.quantity;
    }

    balance.aggravated_doshas = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha]
        .into_iter()
        .filter(|dosha| balance.aggravates(*dosha))
        .collect();

    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::generate_uuid_v7,
        food::entities::{
            AyurvedicProperties, DoshaEffect, DoshaEffectLevel, FoodCategory, FoodConfig,
            NutritionalInfo, Rasa, Vipaka, Virya,
        },
    };

    fn food(name: &str, calories: f64, effect: DoshaEffect) -> FoodItem {
        FoodItem::new(FoodConfig {
            name: name.to_string(),
            category: FoodCategory::Grain,
            ayurvedic: AyurvedicProperties {
                rasa: vec![Rasa::Madhura],
                guna: vec![],
                virya: Virya::Sheeta,
                vipaka: Vipaka::Madhura,
                dosha_effect: effect,
            },
            nutritional: NutritionalInfo {
                calories,
                protein: 2.0,
                carbs: 10.0,
                fat: 0.5,
                fiber: 1.0,
                vitamins: None,
                minerals: None,
            },
            serving_size: "1 cup".to_string(),
            notes: None,
        })
    }

    fn meal(items: Vec<(Uuid, f64)>) -> Meal {
        Meal {
            id: generate_uuid_v7(),
            name: "Lunch".to_string(),
            time: "12:30".to_string(),
            items: items
                .into_iter()
                .map(|(food_id, quantity)| MealItem {
                    food_id,
                    quantity,
                    unit: "cup".to_string(),
                    notes: None,
                })
                .collect(),
        }
    }

    #[test]
    fn nutrition_totals_scale_by_quantity_and_skip_unknown_foods() {
        let neutral = DoshaEffect {
            vata: DoshaEffectLevel::Neutral,
            pitta: DoshaEffectLevel::Neutral,
            kapha: DoshaEffectLevel::Neutral,
        };
        let rice = food("Basmati Rice", 205.0, neutral);
        let dal = food("Moong Dal", 147.5, neutral);
        let meals = vec![meal(vec![
            (rice.id, 2.0),
            (dal.id, 0.5),
            (generate_uuid_v7(), 10.0),
        ])];

        let totals = calculate_nutrition_totals(&meals, &[rice, dal]);

        assert_eq!(totals.calories, 483.75);
        assert_eq!(totals.protein, 5.0);
        assert_eq!(totals.rounded().calories, 484.0);
    }

    #[test]
    fn dosha_balance_adds_increases_and_subtracts_decreases() {
        let ginger = food(
            "Ginger",
            10.0,
            DoshaEffect {
                vata: DoshaEffectLevel::Decreases,
                pitta: DoshaEffectLevel::Increases,
                kapha: DoshaEffectLevel::Decreases,
            },
        );
        let ghee = food(
            "Ghee",
            120.0,
            DoshaEffect {
                vata: DoshaEffectLevel::Decreases,
                pitta: DoshaEffectLevel::Decreases,
                kapha: DoshaEffectLevel::Increases,
            },
        );
        let meals = vec![meal(vec![(ginger.id, 3.0), (ghee.id, 1.0)])];

        let balance = calculate_dosha_balance(&meals, &[ginger, ghee]);

        assert_eq!(balance.vata, -4.0);
        assert_eq!(balance.pitta, 2.0);
        assert_eq!(balance.kapha, -2.0);
        assert_eq!(balance.aggravated_doshas, vec![Dosha::Pitta]);
    }

    #[test]
    fn empty_plan_is_balanced() {
        let balance = calculate_dosha_balance(&[], &[]);

        assert_eq!(balance, DoshaBalance::default());
        assert!(!balance.aggravates(Dosha::Vata));
    }
}
