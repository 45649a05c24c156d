use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ayurdiet_core::domain::appointment::entities::{Appointment, AppointmentStatus};
use ayurdiet_core::domain::appointment::ports::AppointmentService;
use ayurdiet_core::domain::appointment::value_objects::GetAppointmentsFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAppointmentsQuery {
    pub patient_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
    /// Inclusive lower bound (RFC 3339)
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound (RFC 3339)
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "appointment",
    summary = "Get appointments",
    description = "Lists appointments ordered by date.",
    params(GetAppointmentsQuery),
    responses(
        (status = 200, body = GetAppointmentsResponse)
    ),
)]
pub async fn get_appointments(
    Query(query): Query<GetAppointmentsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetAppointmentsResponse>, ApiError> {
    let appointments = state
        .service
        .get_appointments(GetAppointmentsFilter {
            patient_id: query.patient_id,
            status: query.status,
            from: query.from,
            to: query.to,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAppointmentsResponse { appointments }))
}
