use std::sync::{Arc, OnceLock};

use crate::application::http::appointment::router::appointment_routes;
use crate::application::http::diet_plan::router::diet_plan_routes;
use crate::application::http::food::router::food_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::patient::router::patient_routes;
use crate::application::http::recommendation::router::recommendation_routes;
use crate::application::http::recommendation::{SOURCE_HEADER, UNLISTED_FOODS_HEADER};
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use ayurdiet_core::{application::create_service, domain::common::AyurdietConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

type MetricsRenderer = Arc<dyn Fn() -> String + Send + Sync>;

/// The metrics recorder is process-global, so the layer is built once and
/// shared by every router.
fn metrics() -> (PrometheusMetricLayer<'static>, MetricsRenderer) {
    static METRICS: OnceLock<(PrometheusMetricLayer<'static>, MetricsRenderer)> = OnceLock::new();

    METRICS
        .get_or_init(|| {
            let (layer, handle) = PrometheusMetricLayer::pair();
            let render: MetricsRenderer = Arc::new(move || handle.render());
            (layer, render)
        })
        .clone()
}

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = AyurdietConfig::from(args.as_ref().clone());
    debug!("core configuration: {:?}", config);

    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT, LOCATION])
        .expose_headers([
            CONTENT_DISPOSITION,
            HeaderName::from_static(SOURCE_HEADER),
            HeaderName::from_static(UNLISTED_FOODS_HEADER),
        ]);

    let (prometheus_layer, render_metrics) = metrics();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(patient_routes(state.clone()))
        .merge(food_routes(state.clone()))
        .merge(diet_plan_routes(state.clone()))
        .merge(appointment_routes(state.clone()))
        .merge(recommendation_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{}/metrics", root_path),
            get(move || {
                let render_metrics = render_metrics.clone();
                async move { render_metrics() }
            }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
