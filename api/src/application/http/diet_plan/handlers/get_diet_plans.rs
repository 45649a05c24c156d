use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ayurdiet_core::domain::diet_plan::entities::DietPlan;
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use ayurdiet_core::domain::diet_plan::value_objects::GetDietPlansFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetDietPlansQuery {
    pub patient_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetDietPlansResponse {
    pub diet_plans: Vec<DietPlan>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diet-plan",
    summary = "Get diet plans",
    params(GetDietPlansQuery),
    responses(
        (status = 200, body = GetDietPlansResponse)
    ),
)]
pub async fn get_diet_plans(
    Query(query): Query<GetDietPlansQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetDietPlansResponse>, ApiError> {
    let diet_plans = state
        .service
        .get_diet_plans(GetDietPlansFilter {
            patient_id: query.patient_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDietPlansResponse { diet_plans }))
}
