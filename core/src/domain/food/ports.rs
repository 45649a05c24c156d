use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::FoodItem,
        value_objects::{CreateFoodInput, GetFoodsFilter, UpdateFoodInput},
    },
};

/// Repository trait for the food reference catalog. Listing preserves
/// insertion order so prompts render the catalog deterministically.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn create_food(&self, food: FoodItem)
    -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        food_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    fn fetch_foods(
        &self,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn update_food(&self, food: FoodItem)
    -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn delete_food(&self, food_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the food reference catalog
pub trait FoodService: Send + Sync {
    fn get_foods(
        &self,
        filter: GetFoodsFilter,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn get_food(&self, food_id: Uuid) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn create_food(
        &self,
        input: CreateFoodInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn update_food(
        &self,
        input: UpdateFoodInput,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn delete_food(&self, food_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
