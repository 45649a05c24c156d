use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::patient::ports::PatientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletePatientResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{patient_id}",
    tag = "patient",
    summary = "Delete patient",
    description = "Deletes a patient together with their diet plans and appointments.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    responses(
        (status = 200, body = DeletePatientResponse),
        (status = 404, description = "Patient not found")
    ),
)]
pub async fn delete_patient(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeletePatientResponse>, ApiError> {
    state
        .service
        .delete_patient(patient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletePatientResponse { success: true }))
}
