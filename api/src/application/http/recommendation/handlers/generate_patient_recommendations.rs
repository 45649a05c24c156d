use crate::application::http::recommendation::provenance_headers;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use ayurdiet_core::domain::recommendation::entities::Recommendation;
use ayurdiet_core::domain::recommendation::ports::RecommendationService;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/patients/{patient_id}/recommendations",
    tag = "recommendation",
    summary = "Generate recommendations for a stored patient",
    params(
        ("patient_id" = Uuid, Path, description = "Patient ID"),
    ),
    responses(
        (status = 200, body = Recommendation, headers(
            ("x-recommendation-source" = String, description = "`model` or `fallback`"),
            ("x-unlisted-foods" = String, description = "Suggested foods missing from the catalog")
        )),
        (status = 404, description = "Patient not found")
    ),
)]
pub async fn generate_patient_recommendations(
    Path(patient_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<(HeaderMap, Response<Recommendation>), ApiError> {
    let resolution = state
        .service
        .generate_patient_recommendations(patient_id)
        .await
        .map_err(ApiError::from)?;

    Ok((
        provenance_headers(&resolution),
        Response::OK(resolution.value),
    ))
}
