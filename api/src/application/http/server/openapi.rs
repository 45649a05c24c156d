use crate::application::http::{
    appointment::router::AppointmentApiDoc, diet_plan::router::DietPlanApiDoc,
    food::router::FoodApiDoc, health::router::HealthApiDoc, patient::router::PatientApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

// utoipa rejects an empty string literal as a nest path; passing it via a
// const keeps the same "" prefix so recommendation paths stay at the root.
const ROOT_NEST_PATH: &str = "";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AyurDiet API"
    ),
    nest(
        (path = "/patients", api = PatientApiDoc),
        (path = "/foods", api = FoodApiDoc),
        (path = "/diet-plans", api = DietPlanApiDoc),
        (path = "/appointments", api = AppointmentApiDoc),
        (path = ROOT_NEST_PATH, api = RecommendationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
