use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use ayurdiet_core::domain::diet_plan::value_objects::DietPlanSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDietPlanSummaryResponse {
    pub summary: DietPlanSummary,
}

#[utoipa::path(
    get,
    path = "/{plan_id}/summary",
    tag = "diet-plan",
    summary = "Get diet plan summary",
    description = "Nutrition totals and net dosha effect of every item in the plan.",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = GetDietPlanSummaryResponse),
        (status = 404, description = "Diet plan not found")
    ),
)]
pub async fn get_diet_plan_summary(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetDietPlanSummaryResponse>, ApiError> {
    let summary = state
        .service
        .get_diet_plan_summary(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDietPlanSummaryResponse { summary }))
}
