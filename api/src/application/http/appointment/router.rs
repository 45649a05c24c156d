use super::handlers::create_appointment::{__path_create_appointment, create_appointment};
use super::handlers::delete_appointment::{__path_delete_appointment, delete_appointment};
use super::handlers::get_appointment::{__path_get_appointment, get_appointment};
use super::handlers::get_appointments::{__path_get_appointments, get_appointments};
use super::handlers::update_appointment::{__path_update_appointment, update_appointment};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_appointments,
    get_appointment,
    create_appointment,
    update_appointment,
    delete_appointment
))]
pub struct AppointmentApiDoc;

pub fn appointment_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/appointments", root_path),
            get(get_appointments).post(create_appointment),
        )
        .route(
            &format!("{}/appointments/{{appointment_id}}", root_path),
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
}
