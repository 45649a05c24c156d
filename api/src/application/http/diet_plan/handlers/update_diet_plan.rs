use crate::application::http::diet_plan::validators::UpdateDietPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::diet_plan::entities::DietPlan;
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use ayurdiet_core::domain::diet_plan::value_objects::UpdateDietPlanInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDietPlanResponse {
    pub success: bool,
    pub diet_plan: DietPlan,
}

#[utoipa::path(
    put,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Update diet plan",
    description = "Applies a partial update. Sending `meals` replaces every meal of the plan.",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = UpdateDietPlanResponse),
        (status = 404, description = "Diet plan not found")
    ),
    request_body = UpdateDietPlanValidator
)]
pub async fn update_diet_plan(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateDietPlanValidator>,
) -> Result<Response<UpdateDietPlanResponse>, ApiError> {
    let diet_plan = state
        .service
        .update_diet_plan(UpdateDietPlanInput {
            plan_id,
            duration: payload.duration,
            meals: payload.meals,
            guidelines: payload.guidelines,
            restrictions: payload.restrictions,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateDietPlanResponse {
        success: true,
        diet_plan,
    }))
}
