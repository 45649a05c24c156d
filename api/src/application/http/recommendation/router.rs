use super::handlers::generate_meal_recommendations::{
    __path_generate_meal_recommendations, generate_meal_recommendations,
};
use super::handlers::generate_patient_recommendations::{
    __path_generate_patient_recommendations, generate_patient_recommendations,
};
use super::handlers::generate_recommendations::{
    __path_generate_recommendations, generate_recommendations,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_recommendations,
    generate_meal_recommendations,
    generate_patient_recommendations
))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/recommendations", root_path),
            post(generate_recommendations),
        )
        .route(
            &format!("{}/recommendations/smart", root_path),
            post(generate_meal_recommendations),
        )
        .route(
            &format!("{}/patients/{{patient_id}}/recommendations", root_path),
            post(generate_patient_recommendations),
        )
}
