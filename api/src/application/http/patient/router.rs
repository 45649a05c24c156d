use super::handlers::create_patient::{__path_create_patient, create_patient};
use super::handlers::delete_patient::{__path_delete_patient, delete_patient};
use super::handlers::get_patient::{__path_get_patient, get_patient};
use super::handlers::get_patients::{__path_get_patients, get_patients};
use super::handlers::update_patient::{__path_update_patient, update_patient};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_patients, get_patient, create_patient, update_patient, delete_patient))]
pub struct PatientApiDoc;

pub fn patient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/patients", state.args.server.root_path),
            get(get_patients).post(create_patient),
        )
        .route(
            &format!("{}/patients/{{patient_id}}", state.args.server.root_path),
            get(get_patient).put(update_patient).delete(delete_patient),
        )
}
