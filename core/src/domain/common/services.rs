use crate::domain::{
    appointment::ports::AppointmentRepository, common::RecommendationConfig,
    diet_plan::ports::DietPlanRepository, food::ports::FoodRepository,
    patient::ports::PatientRepository, recommendation::ports::TextGenerationClient,
};

/// Aggregates every port the domain services need. Each domain module
/// implements its service trait on this struct.
#[derive(Clone)]
pub struct Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    pub(crate) patient_repository: P,
    pub(crate) food_repository: F,
    pub(crate) diet_plan_repository: D,
    pub(crate) appointment_repository: A,
    pub(crate) llm_client: LLM,
    pub(crate) recommendation_config: RecommendationConfig,
}

impl<P, F, D, A, LLM> Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    pub fn new(
        patient_repository: P,
        food_repository: F,
        diet_plan_repository: D,
        appointment_repository: A,
        llm_client: LLM,
        recommendation_config: RecommendationConfig,
    ) -> Self {
        Self {
            patient_repository,
            food_repository,
            diet_plan_repository,
            appointment_repository,
            llm_client,
            recommendation_config,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Service;
    use crate::{
        domain::{
            common::{RecommendationConfig, entities::app_errors::CoreError},
            recommendation::{ports::TextGenerationClient, value_objects::GenerationParameters},
        },
        infrastructure::{
            appointment::repositories::InMemoryAppointmentRepository,
            diet_plan::repositories::InMemoryDietPlanRepository,
            food::{repositories::InMemoryFoodRepository, seed::seed_foods},
            patient::repositories::InMemoryPatientRepository,
        },
    };

    /// Generation backend that is never reachable.
    #[derive(Clone)]
    pub struct OfflineClient;

    impl TextGenerationClient for OfflineClient {
        async fn generate(
            &self,
            _prompt: String,
            _parameters: GenerationParameters,
        ) -> Result<String, CoreError> {
            Err(CoreError::GenerationFailed("offline".to_string()))
        }
    }

    pub type TestService = Service<
        InMemoryPatientRepository,
        InMemoryFoodRepository,
        InMemoryDietPlanRepository,
        InMemoryAppointmentRepository,
        OfflineClient,
    >;

    pub fn seeded_service() -> TestService {
        Service::new(
            InMemoryPatientRepository::new(),
            InMemoryFoodRepository::with_foods(seed_foods()),
            InMemoryDietPlanRepository::new(),
            InMemoryAppointmentRepository::new(),
            OfflineClient,
            RecommendationConfig::default(),
        )
    }
}
