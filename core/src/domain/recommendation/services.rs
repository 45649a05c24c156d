use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::{ports::FoodRepository, value_objects::GetFoodsFilter},
    patient::{entities::PatientProfile, ports::PatientRepository},
    recommendation::{
        entities::{MealRecommendation, Recommendation},
        fallback::{default_meal_recommendation, default_recommendation},
        ports::{RecommendationService, TextGenerationClient},
        prompt::{build_meal_prompt, build_recommendation_prompt},
        resolver::{check_catalog, resolve},
        value_objects::{GenerationParameters, MealRecommendationInput, Resolution},
    },
};

impl<P, F, D, A, LLM> Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    /// Bounds the upstream call; an elapsed timeout is reported like any
    /// other generation failure.
    async fn generate_text(
        &self,
        prompt: String,
        parameters: GenerationParameters,
    ) -> Result<String, CoreError> {
        let timeout = self.recommendation_config.generation_timeout;

        match tokio::time::timeout(timeout, self.llm_client.generate(prompt, parameters)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(CoreError::GenerationFailed(format!(
                "generation timed out after {}s",
                timeout.as_secs()
            ))),
        }
    }
}

fn log_resolution<T>(resolution: &Resolution<T>) {
    match resolution.failure {
        Some(failure) => warn!(
            provenance = %resolution.provenance,
            failure = %failure,
            "recommendation resolved to fallback"
        ),
        None => info!(
            provenance = %resolution.provenance,
            "recommendation resolved"
        ),
    }
}

impl<P, F, D, A, LLM> RecommendationService for Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    #[instrument(skip_all, fields(dominant_dosha = %profile.prakriti.dominant_dosha))]
    async fn generate_recommendations(
        &self,
        profile: PatientProfile,
    ) -> Result<Resolution<Recommendation>, CoreError> {
        let catalog = self
            .food_repository
            .fetch_foods(GetFoodsFilter::default())
            .await?;

        let prompt = build_recommendation_prompt(&profile, &catalog);
        let outcome = self
            .generate_text(prompt, GenerationParameters::general())
            .await;

        let mut resolution = resolve(outcome, default_recommendation);
        check_catalog(
            &mut resolution,
            &catalog,
            self.recommendation_config.filter_unlisted_foods,
        );

        if !resolution.unlisted_foods.is_empty() {
            warn!(
                unlisted_foods = ?resolution.unlisted_foods,
                filtered = self.recommendation_config.filter_unlisted_foods,
                "model suggested foods outside the catalog"
            );
        }

        log_resolution(&resolution);

        Ok(resolution)
    }

    #[instrument(skip_all, fields(meal_type = ?input.meal_type))]
    async fn generate_meal_recommendations(
        &self,
        input: MealRecommendationInput,
    ) -> Result<Resolution<MealRecommendation>, CoreError> {
        let meal_type = input.meal_type.as_deref();
        let prompt = build_meal_prompt(&input.profile, meal_type, input.time_of_day.as_deref());
        let outcome = self.generate_text(prompt, GenerationParameters::meal()).await;

        let resolution = resolve(outcome, || default_meal_recommendation(meal_type));

        log_resolution(&resolution);

        Ok(resolution)
    }

    async fn generate_patient_recommendations(
        &self,
        patient_id: Uuid,
    ) -> Result<Resolution<Recommendation>, CoreError> {
        let patient = self
            .patient_repository
            .get_by_id(patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)?;

        self.generate_recommendations(patient.profile()).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        domain::{
            common::RecommendationConfig,
            patient::{
                entities::{Gender, Prakriti},
                ports::PatientService,
                value_objects::CreatePatientInput,
            },
            recommendation::{
                ports::MockTextGenerationClient,
                value_objects::{Provenance, ResolveFailure},
            },
        },
        infrastructure::{
            appointment::repositories::InMemoryAppointmentRepository,
            diet_plan::repositories::InMemoryDietPlanRepository,
            food::{repositories::InMemoryFoodRepository, seed::seed_foods},
            patient::repositories::InMemoryPatientRepository,
        },
    };

    fn replying(text: &'static str) -> MockTextGenerationClient {
        let mut client = MockTextGenerationClient::new();
        client
            .expect_generate()
            .returning(move |_, _| Box::pin(async move { Ok(text.to_string()) }));
        client
    }

    fn failing() -> MockTextGenerationClient {
        let mut client = MockTextGenerationClient::new();
        client.expect_generate().returning(|_, _| {
            Box::pin(async {
                Err(CoreError::GenerationFailed(
                    "connection refused".to_string(),
                ))
            })
        });
        client
    }

    type TestService = Service<
        InMemoryPatientRepository,
        InMemoryFoodRepository,
        InMemoryDietPlanRepository,
        InMemoryAppointmentRepository,
        MockTextGenerationClient,
    >;

    fn service(client: MockTextGenerationClient, config: RecommendationConfig) -> TestService {
        Service::new(
            InMemoryPatientRepository::default(),
            InMemoryFoodRepository::with_foods(seed_foods()),
            InMemoryDietPlanRepository::default(),
            InMemoryAppointmentRepository::default(),
            client,
            config,
        )
    }

    fn profile() -> PatientProfile {
        PatientProfile {
            name: "Ravi Kumar".to_string(),
            age: 41,
            gender: Gender::Male,
            prakriti: Prakriti::new(20, 55, 25),
            current_conditions: vec!["Acidity".to_string()],
            allergies: vec![],
            dietary_restrictions: vec![],
        }
    }

    const MODEL_ANSWER: &str = r#"Based on the profile:
{"recommendedFoods":["Basmati Rice","Coconut Water","Dragon Fruit"],"foodsToAvoid":["chili pepper"],"dietaryGuidelines":["Favor cooling foods"],"lifestyleRecommendations":["Avoid midday sun"]}"#;

    #[tokio::test]
    async fn model_answer_is_returned_with_unlisted_foods_flagged() {
        let service = service(
            replying(MODEL_ANSWER),
            RecommendationConfig::default(),
        );

        let resolution = service.generate_recommendations(profile()).await.unwrap();

        assert_eq!(resolution.provenance, Provenance::Model);
        assert_eq!(
            resolution.value.recommended_foods,
            vec!["Basmati Rice", "Coconut Water", "Dragon Fruit"]
        );
        assert_eq!(resolution.unlisted_foods, vec!["Dragon Fruit"]);
    }

    #[tokio::test]
    async fn unlisted_foods_are_dropped_when_filtering() {
        let service = service(
            replying(MODEL_ANSWER),
            RecommendationConfig {
                filter_unlisted_foods: true,
                ..RecommendationConfig::default()
            },
        );

        let resolution = service.generate_recommendations(profile()).await.unwrap();

        assert_eq!(
            resolution.value.recommended_foods,
            vec!["Basmati Rice", "Coconut Water"]
        );
        assert_eq!(resolution.value.foods_to_avoid, vec!["chili pepper"]);
        assert_eq!(resolution.unlisted_foods, vec!["Dragon Fruit"]);
    }

    #[tokio::test]
    async fn upstream_failure_resolves_to_fallback() {
        let service = service(failing(), RecommendationConfig::default());

        let resolution = service.generate_recommendations(profile()).await.unwrap();

        assert_eq!(resolution.value, default_recommendation());
        assert_eq!(resolution.failure, Some(ResolveFailure::UpstreamUnavailable));
        assert!(resolution.unlisted_foods.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_upstream_times_out_into_fallback() {
        let mut client = MockTextGenerationClient::new();
        client.expect_generate().returning(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(MODEL_ANSWER.to_string())
            })
        });
        let service = service(
            client,
            RecommendationConfig {
                generation_timeout: Duration::from_secs(5),
                ..RecommendationConfig::default()
            },
        );

        let resolution = service.generate_recommendations(profile()).await.unwrap();

        assert_eq!(resolution.provenance, Provenance::Fallback);
        assert_eq!(resolution.failure, Some(ResolveFailure::UpstreamUnavailable));
    }

    #[tokio::test]
    async fn meal_fallback_follows_meal_type() {
        let service = service(
            replying("Sorry, I can only answer in prose."),
            RecommendationConfig::default(),
        );

        let resolution = service
            .generate_meal_recommendations(MealRecommendationInput {
                profile: profile(),
                meal_type: Some("Breakfast".to_string()),
                time_of_day: None,
            })
            .await
            .unwrap();

        assert_eq!(resolution.value, default_meal_recommendation(Some("Breakfast")));
        assert_eq!(resolution.failure, Some(ResolveFailure::UnparsableOutput));
    }

    #[tokio::test]
    async fn meal_answer_is_parsed() {
        let mut client = MockTextGenerationClient::new();
        client
            .expect_generate()
            .withf(|prompt, parameters| {
                prompt.contains("- Meal Type: Dinner")
                    && prompt.contains("- Time of Day: evening")
                    && *parameters == GenerationParameters::meal()
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Ok(r#"{"recommendedFoods":["Khichdi"],"avoidFoods":["Cheese"],"cookingTips":["Use cumin"],"timingGuidance":"Before 7 PM","ayurvedicPrinciples":["Eat light"]}"#.to_string())
                })
            });
        let service = service(client, RecommendationConfig::default());

        let resolution = service
            .generate_meal_recommendations(MealRecommendationInput {
                profile: profile(),
                meal_type: Some("Dinner".to_string()),
                time_of_day: Some("evening".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(resolution.provenance, Provenance::Model);
        assert_eq!(resolution.value.timing_guidance, "Before 7 PM");
    }

    #[tokio::test]
    async fn stored_patient_recommendations() {
        let service = service(failing(), RecommendationConfig::default());

        let missing = service.generate_patient_recommendations(Uuid::new_v4()).await;
        assert_eq!(missing, Err(CoreError::PatientNotFound));

        let patient = service
            .create_patient(CreatePatientInput {
                name: "Meera".to_string(),
                age: 29,
                gender: Gender::Female,
                contact: "meera@example.com".to_string(),
                prakriti: Prakriti::new(30, 30, 40),
                current_conditions: vec![],
                allergies: vec![],
                dietary_restrictions: vec![],
                last_visit: None,
            })
            .await
            .unwrap();

        let resolution = service
            .generate_patient_recommendations(patient.id)
            .await
            .unwrap();

        assert_eq!(resolution.value, default_recommendation());
    }
}
