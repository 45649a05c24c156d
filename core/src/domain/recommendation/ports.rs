use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    patient::entities::PatientProfile,
    recommendation::{
        entities::{MealRecommendation, Recommendation},
        value_objects::{GenerationParameters, MealRecommendationInput, Resolution},
    },
};

/// Text-generation backend. Every failure mode surfaces as
/// `CoreError::GenerationFailed`; implementations never retry.
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerationClient: Send + Sync {
    fn generate(
        &self,
        prompt: String,
        parameters: GenerationParameters,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the recommendation pipeline. Upstream and parse
/// failures resolve to a static default instead of an error.
pub trait RecommendationService: Send + Sync {
    fn generate_recommendations(
        &self,
        profile: PatientProfile,
    ) -> impl Future<Output = Result<Resolution<Recommendation>, CoreError>> + Send;

    fn generate_meal_recommendations(
        &self,
        input: MealRecommendationInput,
    ) -> impl Future<Output = Result<Resolution<MealRecommendation>, CoreError>> + Send;

    /// Same as `generate_recommendations`, for a stored patient.
    fn generate_patient_recommendations(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Resolution<Recommendation>, CoreError>> + Send;
}
