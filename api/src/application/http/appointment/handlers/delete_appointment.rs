use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ayurdiet_core::domain::appointment::ports::AppointmentService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteAppointmentResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/{appointment_id}",
    tag = "appointment",
    summary = "Delete appointment",
    params(
        ("appointment_id" = Uuid, Path, description = "Appointment ID"),
    ),
    responses(
        (status = 200, body = DeleteAppointmentResponse),
        (status = 404, description = "Appointment not found")
    ),
)]
pub async fn delete_appointment(
    Path(appointment_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteAppointmentResponse>, ApiError> {
    state
        .service
        .delete_appointment(appointment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteAppointmentResponse { success: true }))
}
