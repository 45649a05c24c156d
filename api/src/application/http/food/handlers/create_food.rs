use crate::application::http::food::validators::CreateFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ayurdiet_core::domain::food::entities::FoodItem;
use ayurdiet_core::domain::food::ports::FoodService;
use ayurdiet_core::domain::food::value_objects::CreateFoodInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFoodResponse {
    pub success: bool,
    pub food: FoodItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food",
    summary = "Create food",
    description = "Adds a food to the reference catalog.",
    responses(
        (status = 201, body = CreateFoodResponse)
    ),
    request_body = CreateFoodValidator
)]
pub async fn create_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodValidator>,
) -> Result<Response<CreateFoodResponse>, ApiError> {
    let food = state
        .service
        .create_food(CreateFoodInput {
            name: payload.name,
            category: payload.category,
            ayurvedic: payload.ayurvedic,
            nutritional: payload.nutritional,
            serving_size: payload.serving_size,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateFoodResponse {
        success: true,
        food,
    }))
}
