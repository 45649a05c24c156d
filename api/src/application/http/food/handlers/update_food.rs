use crate::application::http::food::validators::UpdateFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::food::entities::FoodItem;
use ayurdiet_core::domain::food::ports::FoodService;
use ayurdiet_core::domain::food::value_objects::UpdateFoodInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateFoodResponse {
    pub success: bool,
    pub food: FoodItem,
}

#[utoipa::path(
    put,
    path = "/{food_id}",
    tag = "food",
    summary = "Update food",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = UpdateFoodResponse),
        (status = 404, description = "Food not found")
    ),
    request_body = UpdateFoodValidator
)]
pub async fn update_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodValidator>,
) -> Result<Response<UpdateFoodResponse>, ApiError> {
    let food = state
        .service
        .update_food(UpdateFoodInput {
            food_id,
            name: payload.name,
            category: payload.category,
            ayurvedic: payload.ayurvedic,
            nutritional: payload.nutritional,
            serving_size: payload.serving_size,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateFoodResponse {
        success: true,
        food,
    }))
}
