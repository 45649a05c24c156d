use crate::application::http::appointment::validators::UpdateAppointmentValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::appointment::entities::Appointment;
use ayurdiet_core::domain::appointment::ports::AppointmentService;
use ayurdiet_core::domain::appointment::value_objects::UpdateAppointmentInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateAppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

#[utoipa::path(
    put,
    path = "/{appointment_id}",
    tag = "appointment",
    summary = "Update appointment",
    params(
        ("appointment_id" = Uuid, Path, description = "Appointment ID"),
    ),
    responses(
        (status = 200, body = UpdateAppointmentResponse),
        (status = 404, description = "Appointment not found")
    ),
    request_body = UpdateAppointmentValidator
)]
pub async fn update_appointment(
    Path(appointment_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateAppointmentValidator>,
) -> Result<Response<UpdateAppointmentResponse>, ApiError> {
    let appointment = state
        .service
        .update_appointment(UpdateAppointmentInput {
            appointment_id,
            date: payload.date,
            appointment_type: payload.appointment_type,
            status: payload.status,
            notes: payload.notes,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateAppointmentResponse {
        success: true,
        appointment,
    }))
}
