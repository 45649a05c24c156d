use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteDietPlanResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Delete diet plan",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = DeleteDietPlanResponse),
        (status = 404, description = "Diet plan not found")
    ),
)]
pub async fn delete_diet_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteDietPlanResponse>, ApiError> {
    state
        .service
        .delete_diet_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteDietPlanResponse { success: true }))
}
