use crate::application::http::diet_plan::validators::CreateDietPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ayurdiet_core::domain::diet_plan::entities::DietPlan;
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use ayurdiet_core::domain::diet_plan::value_objects::CreateDietPlanInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDietPlanResponse {
    pub success: bool,
    pub diet_plan: DietPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "diet-plan",
    summary = "Create diet plan",
    description = "Creates a plan for an existing patient. Every meal item must reference a catalog food.",
    responses(
        (status = 201, body = CreateDietPlanResponse),
        (status = 400, description = "Unknown food or invalid quantity"),
        (status = 404, description = "Patient not found")
    ),
    request_body = CreateDietPlanValidator
)]
pub async fn create_diet_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateDietPlanValidator>,
) -> Result<Response<CreateDietPlanResponse>, ApiError> {
    let diet_plan = state
        .service
        .create_diet_plan(CreateDietPlanInput {
            patient_id: payload.patient_id,
            duration: payload.duration,
            meals: payload.meals,
            guidelines: payload.guidelines,
            restrictions: payload.restrictions,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateDietPlanResponse {
        success: true,
        diet_plan,
    }))
}
