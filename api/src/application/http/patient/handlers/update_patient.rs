use crate::application::http::patient::validators::UpdatePatientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::patient::entities::Patient;
use ayurdiet_core::domain::patient::ports::PatientService;
use ayurdiet_core::domain::patient::value_objects::UpdatePatientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePatientResponse {
    pub success: bool,
    pub patient: Patient,
}

#[utoipa::path(
    put,
    path = "/{patient_id}",
    tag = "patient",
    summary = "Update patient",
    description = "Applies a partial update. Omitted fields keep their stored value.",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    responses(
        (status = 200, body = UpdatePatientResponse),
        (status = 404, description = "Patient not found")
    ),
    request_body = UpdatePatientValidator
)]
pub async fn update_patient(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdatePatientValidator>,
) -> Result<Response<UpdatePatientResponse>, ApiError> {
    let patient = state
        .service
        .update_patient(UpdatePatientInput {
            patient_id,
            name: payload.name,
            age: payload.age,
            gender: payload.gender,
            contact: payload.contact,
            prakriti: payload.prakriti,
            current_conditions: payload.current_conditions,
            allergies: payload.allergies,
            dietary_restrictions: payload.dietary_restrictions,
            last_visit: payload.last_visit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePatientResponse {
        success: true,
        patient,
    }))
}
