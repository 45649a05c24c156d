use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use ayurdiet_core::domain::diet_plan::ports::DietPlanService;
use ayurdiet_core::domain::diet_plan::value_objects::{DietPlanDocument, ExportFormat};
use uuid::Uuid;

fn attachment(document: DietPlanDocument) -> Response {
    (
        [
            (CONTENT_TYPE, document.format.content_type().to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.filename),
            ),
        ],
        document.body,
    )
        .into_response()
}

async fn export(
    state: &AppState,
    plan_id: Uuid,
    format: ExportFormat,
) -> Result<Response, ApiError> {
    let document = state
        .service
        .export_diet_plan(plan_id, format)
        .await
        .map_err(ApiError::from)?;

    Ok(attachment(document))
}

#[utoipa::path(
    get,
    path = "/{plan_id}/export/csv",
    tag = "diet-plan",
    summary = "Export diet plan as CSV",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, description = "Spreadsheet export", content_type = "text/csv", body = String),
        (status = 404, description = "Diet plan or patient not found")
    ),
)]
pub async fn export_diet_plan_csv(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    export(&state, plan_id, ExportFormat::Csv).await
}

#[utoipa::path(
    get,
    path = "/{plan_id}/export/html",
    tag = "diet-plan",
    summary = "Export diet plan as HTML",
    description = "Standalone printable document.",
    params(
        ("plan_id" = Uuid, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, description = "Printable export", content_type = "text/html", body = String),
        (status = 404, description = "Diet plan or patient not found")
    ),
)]
pub async fn export_diet_plan_html(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    export(&state, plan_id, ExportFormat::Html).await
}
