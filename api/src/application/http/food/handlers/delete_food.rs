use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteFoodResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{food_id}",
    tag = "food",
    summary = "Delete food",
    description = "Removes a food from the catalog. Diet plans that reference it keep the item, which is skipped in totals and exports.",
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = DeleteFoodResponse),
        (status = 404, description = "Food not found")
    ),
)]
pub async fn delete_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteFoodResponse>, ApiError> {
    state
        .service
        .delete_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteFoodResponse { success: true }))
}
