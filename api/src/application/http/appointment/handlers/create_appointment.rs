use crate::application::http::appointment::validators::CreateAppointmentValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ayurdiet_core::domain::appointment::entities::Appointment;
use ayurdiet_core::domain::appointment::ports::AppointmentService;
use ayurdiet_core::domain::appointment::value_objects::CreateAppointmentInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateAppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

#[utoipa::path(
    post,
    path = "",
    tag = "appointment",
    summary = "Book appointment",
    description = "New appointments always start as scheduled.",
    responses(
        (status = 201, body = CreateAppointmentResponse),
        (status = 404, description = "Patient not found")
    ),
    request_body = CreateAppointmentValidator
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateAppointmentValidator>,
) -> Result<Response<CreateAppointmentResponse>, ApiError> {
    let appointment = state
        .service
        .create_appointment(CreateAppointmentInput {
            patient_id: payload.patient_id,
            date: payload.date,
            appointment_type: payload.appointment_type,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateAppointmentResponse {
        success: true,
        appointment,
    }))
}
