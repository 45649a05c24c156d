use super::handlers::create_diet_plan::{__path_create_diet_plan, create_diet_plan};
use super::handlers::delete_diet_plan::{__path_delete_diet_plan, delete_diet_plan};
use super::handlers::export_diet_plan::{
    __path_export_diet_plan_csv, __path_export_diet_plan_html, export_diet_plan_csv,
    export_diet_plan_html,
};
use super::handlers::get_diet_plan::{__path_get_diet_plan, get_diet_plan};
use super::handlers::get_diet_plan_summary::{__path_get_diet_plan_summary, get_diet_plan_summary};
use super::handlers::get_diet_plans::{__path_get_diet_plans, get_diet_plans};
use super::handlers::update_diet_plan::{__path_update_diet_plan, update_diet_plan};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_diet_plans,
    get_diet_plan,
    create_diet_plan,
    update_diet_plan,
    delete_diet_plan,
    get_diet_plan_summary,
    export_diet_plan_csv,
    export_diet_plan_html
))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/diet-plans", root_path),
            get(get_diet_plans).post(create_diet_plan),
        )
        .route(
            &format!("{}/diet-plans/{{plan_id}}", root_path),
            get(get_diet_plan)
                .put(update_diet_plan)
                .delete(delete_diet_plan),
        )
        .route(
            &format!("{}/diet-plans/{{plan_id}}/summary", root_path),
            get(get_diet_plan_summary),
        )
        .route(
            &format!("{}/diet-plans/{{plan_id}}/export/csv", root_path),
            get(export_diet_plan_csv),
        )
        .route(
            &format!("{}/diet-plans/{{plan_id}}/export/html", root_path),
            get(export_diet_plan_html),
        )
}
