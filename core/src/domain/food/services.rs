use uuid::Uuid;

use crate::domain::{
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::{
        entities::{FoodConfig, FoodItem},
        ports::{FoodRepository, FoodService},
        value_objects::{CreateFoodInput, GetFoodsFilter, UpdateFoodInput},
    },
    patient::ports::PatientRepository,
    recommendation::ports::TextGenerationClient,
};

impl<P, F, D, A, LLM> FoodService for Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    async fn get_foods(&self, filter: GetFoodsFilter) -> Result<Vec<FoodItem>, CoreError> {
        self.food_repository.fetch_foods(filter).await
    }

    async fn get_food(&self, food_id: Uuid) -> Result<FoodItem, CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_food(&self, input: CreateFoodInput) -> Result<FoodItem, CoreError> {
        let food = FoodItem::new(FoodConfig {
            name: input.name,
            category: input.category,
            ayurvedic: input.ayurvedic,
            nutritional: input.nutritional,
            serving_size: input.serving_size,
            notes: input.notes,
        });

        self.food_repository.create_food(food).await
    }

    async fn update_food(&self, input: UpdateFoodInput) -> Result<FoodItem, CoreError> {
        let mut food = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        food.update(input);

        self.food_repository.update_food(food).await
    }

    async fn delete_food(&self, food_id: Uuid) -> Result<(), CoreError> {
        self.food_repository
            .get_by_id(food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.food_repository.delete_food(food_id).await
    }
}
