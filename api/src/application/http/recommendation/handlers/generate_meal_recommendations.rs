use crate::application::http::recommendation::provenance_headers;
use crate::application::http::recommendation::validators::GenerateMealRecommendationsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum::http::HeaderMap;
use ayurdiet_core::domain::recommendation::entities::MealRecommendation;
use ayurdiet_core::domain::recommendation::ports::RecommendationService;
use ayurdiet_core::domain::recommendation::value_objects::MealRecommendationInput;

#[utoipa::path(
    post,
    path = "/recommendations/smart",
    tag = "recommendation",
    summary = "Generate meal recommendations",
    description = "Advice for a single meal. The fallback depends on `mealType`: `Breakfast` and `Dinner` have their own defaults, anything else gets the lunch default.",
    responses(
        (status = 200, body = MealRecommendation, headers(
            ("x-recommendation-source" = String, description = "`model` or `fallback`")
        ))
    ),
    request_body = GenerateMealRecommendationsValidator
)]
pub async fn generate_meal_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateMealRecommendationsValidator>,
) -> Result<(HeaderMap, Response<MealRecommendation>), ApiError> {
    let resolution = state
        .service
        .generate_meal_recommendations(MealRecommendationInput {
            profile: payload.patient,
            meal_type: payload.meal_type,
            time_of_day: payload.time_of_day,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((
        provenance_headers(&resolution),
        Response::OK(resolution.value),
    ))
}
