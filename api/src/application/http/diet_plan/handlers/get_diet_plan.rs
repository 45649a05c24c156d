use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::diet_plan::entities::DietPlan;
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetDietPlanResponse {
    pub diet_plan: DietPlan,
}

#[utoipa::path(
    get,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Get diet plan",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = GetDietPlanResponse),
        (status = 404, description = "Diet plan not found")
    ),
)]
pub async fn get_diet_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetDietPlanResponse>, ApiError> {
    let diet_plan = state
        .service
        .get_diet_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDietPlanResponse { diet_plan }))
}
