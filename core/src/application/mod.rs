use tracing::info;

use crate::{
    domain::common::{AyurdietConfig, services::Service},
    infrastructure::{
        appointment::repositories::InMemoryAppointmentRepository,
        diet_plan::repositories::InMemoryDietPlanRepository,
        food::{repositories::InMemoryFoodRepository, seed::seed_foods},
        llm::HuggingFaceLLMClient,
        patient::repositories::InMemoryPatientRepository,
    },
};

pub type AyurdietService = Service<
    InMemoryPatientRepository,
    InMemoryFoodRepository,
    InMemoryDietPlanRepository,
    InMemoryAppointmentRepository,
    HuggingFaceLLMClient,
>;

pub async fn create_service(config: AyurdietConfig) -> Result<AyurdietService, anyhow::Error> {
    let foods = seed_foods();
    info!(foods = foods.len(), "food catalog seeded");

    if config.llm.api_key.is_none() {
        info!("no Hugging Face API key configured, requests are sent anonymously");
    }

    let llm_client = HuggingFaceLLMClient::new(config.llm);

    Ok(Service::new(
        InMemoryPatientRepository::new(),
        InMemoryFoodRepository::with_foods(foods),
        InMemoryDietPlanRepository::new(),
        InMemoryAppointmentRepository::new(),
        llm_client,
        config.recommendation,
    ))
}
