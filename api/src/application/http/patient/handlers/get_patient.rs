use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::patient::entities::Patient;
use ayurdiet_core::domain::patient::ports::PatientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPatientResponse {
    pub patient: Patient,
}

#[utoipa::path(
    get,
    path = "/{patient_id}",
    tag = "patient",
    summary = "Get patient",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    responses(
        (status = 200, body = GetPatientResponse),
        (status = 404, description = "Patient not found")
    ),
)]
pub async fn get_patient(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetPatientResponse>, ApiError> {
    let patient = state
        .service
        .get_patient(patient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPatientResponse { patient }))
}
