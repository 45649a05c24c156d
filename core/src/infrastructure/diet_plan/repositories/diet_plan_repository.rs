use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{entities::DietPlan, ports::DietPlanRepository, value_objects::GetDietPlansFilter},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryDietPlanRepository {
    plans: Arc<RwLock<Vec<DietPlan>>>,
}

impl InMemoryDietPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DietPlanRepository for InMemoryDietPlanRepository {
    async fn create_plan(&self, plan: DietPlan) -> Result<DietPlan, CoreError> {
        self.plans.write().await.push(plan.clone());
        Ok(plan)
    }

    async fn get_by_id(&self, plan_id: Uuid) -> Result<Option<DietPlan>, CoreError> {
        let plans = self.plans.read().await;
        Ok(plans.iter().find(|p| p.id == plan_id).cloned())
    }

    async fn fetch_plans(&self, filter: GetDietPlansFilter) -> Result<Vec<DietPlan>, CoreError> {
        let plans = self.plans.read().await;
        Ok(plans
            .iter()
            .filter(|p| filter.patient_id.is_none_or(|id| p.patient_id == id))
            .cloned()
            .collect())
    }

    async fn update_plan(&self, plan: DietPlan) -> Result<DietPlan, CoreError> {
        let mut plans = self.plans.write().await;
        let slot = plans
            .iter_mut()
            .find(|p| p.id == plan.id)
            .ok_or(CoreError::NotFound)?;

        *slot = plan.clone();
        Ok(plan)
    }

    async fn delete_plan(&self, plan_id: Uuid) -> Result<(), CoreError> {
        let mut plans = self.plans.write().await;
        let before = plans.len();
        plans.retain(|p| p.id != plan_id);

        if plans.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_patient(&self, patient_id: Uuid) -> Result<usize, CoreError> {
        let mut plans = self.plans.write().await;
        let before = plans.len();
        plans.retain(|p| p.patient_id != patient_id);

        Ok(before - plans.len())
    }
}
