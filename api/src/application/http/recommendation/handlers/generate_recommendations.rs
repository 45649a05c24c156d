use crate::application::http::recommendation::provenance_headers;
use crate::application::http::recommendation::validators::GenerateRecommendationsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use ayurdiet_core::domain::recommendation::entities::Recommendation;
use ayurdiet_core::domain::recommendation::ports::RecommendationService;

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "recommendation",
    summary = "Generate recommendations",
    description = "Asks the text-generation model for general dietary advice. When the model is unreachable or its answer cannot be parsed a default recommendation is returned with `x-recommendation-source: fallback`.",
    responses(
        (status = 200, body = Recommendation, headers(
            ("x-recommendation-source" = String, description = "`model` or `fallback`"),
            ("x-unlisted-foods" = String, description = "Suggested foods missing from the catalog")
        ))
    ),
    request_body = GenerateRecommendationsValidator
)]
pub async fn generate_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecommendationsValidator>,
) -> Result<(HeaderMap, Response<Recommendation>), ApiError> {
    let resolution = state
        .service
        .generate_recommendations(payload.patient)
        .await
        .map_err(ApiError::from)?;

    Ok((
        provenance_headers(&resolution),
        Response::OK(resolution.value),
    ))
}
