use uuid::Uuid;

use crate::domain::food::entities::{AyurvedicProperties, FoodCategory, FoodItem, NutritionalInfo};

#[derive(Debug, Clone)]
pub struct CreateFoodInput {
    pub name: String,
    pub category: FoodCategory,
    pub ayurvedic: AyurvedicProperties,
    pub nutritional: NutritionalInfo,
    pub serving_size: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFoodInput {
    pub food_id: Uuid,
    pub name: Option<String>,
    pub category: Option<FoodCategory>,
    pub ayurvedic: Option<AyurvedicProperties>,
    pub nutritional: Option<NutritionalInfo>,
    pub serving_size: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetFoodsFilter {
    pub category: Option<FoodCategory>,
    /// Case-insensitive substring match on the food name.
    pub search: Option<String>,
}

impl GetFoodsFilter {
    pub fn matches(&self, food: &FoodItem) -> bool {
        if let Some(category) = self.category
            && food.category != category
        {
            return false;
        }

        match &self.search {
            Some(search) => food.name.to_lowercase().contains(&search.to_lowercase()),
            None => true,
        }
    }
}
