use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ayurdiet_core::domain::food::entities::{FoodCategory, FoodItem};
use ayurdiet_core::domain::food::ports::FoodService;
use ayurdiet_core::domain::food::value_objects::GetFoodsFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetFoodsQuery {
    pub category: Option<FoodCategory>,
    /// Case-insensitive match on the food name
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodsResponse {
    pub foods: Vec<FoodItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "Get foods",
    description = "Lists the food reference catalog.",
    params(GetFoodsQuery),
    responses(
        (status = 200, body = GetFoodsResponse)
    ),
)]
pub async fn get_foods(
    Query(query): Query<GetFoodsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodsResponse>, ApiError> {
    let foods = state
        .service
        .get_foods(GetFoodsFilter {
            category: query.category,
            search: query.search,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodsResponse { foods }))
}
