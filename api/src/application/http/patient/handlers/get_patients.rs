use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ayurdiet_core::domain::patient::entities::{Dosha, Patient};
use ayurdiet_core::domain::patient::ports::PatientService;
use ayurdiet_core::domain::patient::value_objects::GetPatientsFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetPatientsQuery {
    /// Case-insensitive match on the patient name
    pub search: Option<String>,
    pub dominant_dosha: Option<Dosha>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPatientsResponse {
    pub patients: Vec<Patient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "patient",
    summary = "Get patients",
    description = "Lists patient records in creation order.",
    params(GetPatientsQuery),
    responses(
        (status = 200, body = GetPatientsResponse)
    ),
)]
pub async fn get_patients(
    Query(query): Query<GetPatientsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetPatientsResponse>, ApiError> {
    let patients = state
        .service
        .get_patients(GetPatientsFilter {
            search: query.search,
            dominant_dosha: query.dominant_dosha,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPatientsResponse { patients }))
}
