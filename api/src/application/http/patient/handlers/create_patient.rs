use crate::application::http::patient::validators::CreatePatientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ayurdiet_core::domain::patient::entities::Patient;
use ayurdiet_core::domain::patient::ports::PatientService;
use ayurdiet_core::domain::patient::value_objects::CreatePatientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatePatientResponse {
    pub success: bool,
    pub patient: Patient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "patient",
    summary = "Create patient",
    description = "Registers a patient. The dominant dosha is derived from the prakriti shares.",
    responses(
        (status = 201, body = CreatePatientResponse)
    ),
    request_body = CreatePatientValidator
)]
pub async fn create_patient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreatePatientValidator>,
) -> Result<Response<CreatePatientResponse>, ApiError> {
    let patient = state
        .service
        .create_patient(CreatePatientInput {
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

    Ok(Response::Created(CreatePatientResponse {
        success: true,
        patient,
    }))
}
