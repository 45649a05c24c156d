use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::appointment::entities::Appointment;
use ayurdiet_core::domain::appointment::ports::AppointmentService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAppointmentResponse {
    pub appointment: Appointment,
}

#[utoipa::path(
    get,
    path = "/{appointment_id}",
    tag = "appointment",
    summary = "Get appointment",
    params(
        ("appointment_id" = Uuid, Path, description = "Appointment ID"),
    ),
    responses(
        (status = 200, body = GetAppointmentResponse),
        (status = 404, description = "Appointment not found")
    ),
)]
pub async fn get_appointment(
    Path(appointment_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetAppointmentResponse>, ApiError> {
    let appointment = state
        .service
        .get_appointment(appointment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAppointmentResponse { appointment }))
}
