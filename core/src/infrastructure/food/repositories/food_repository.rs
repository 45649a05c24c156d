use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::FoodItem, ports::FoodRepository, value_objects::GetFoodsFilter},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodRepository {
    foods: Arc<RwLock<Vec<FoodItem>>>,
}

impl InMemoryFoodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_foods(foods: Vec<FoodItem>) -> Self {
        Self {
            foods: Arc::new(RwLock::new(foods)),
        }
    }
}

impl FoodRepository for InMemoryFoodRepository {
    async fn create_food(&self, food: FoodItem) -> Result<FoodItem, CoreError> {
        self.foods.write().await.push(food.clone());
        Ok(food)
    }

    async fn get_by_id(&self, food_id: Uuid) -> Result<Option<FoodItem>, CoreError> {
        let foods = self.foods.read().await;
        Ok(foods.iter().find(|f| f.id == food_id).cloned())
    }

    async fn fetch_foods(&self, filter: GetFoodsFilter) -> Result<Vec<FoodItem>, CoreError> {
        let foods = self.foods.read().await;
        Ok(foods.iter().filter(|f| filter.matches(f)).cloned().collect())
    }

    async fn update_food(&self, food: FoodItem) -> Result<FoodItem, CoreError> {
        let mut foods = self.foods.write().await;
        let slot = foods
            .iter_mut()
            .find(|f| f.id == food.id)
            .ok_or(CoreError::NotFound)?;

        *slot = food.clone();
        Ok(food)
    }

    async fn delete_food(&self, food_id: Uuid) -> Result<(), CoreError> {
        let mut foods = self.foods.write().await;
        let before = foods.len();
        foods.retain(|f| f.id != food_id);

        if foods.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }
}
