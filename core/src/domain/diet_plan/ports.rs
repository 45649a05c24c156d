use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::DietPlan,
        value_objects::{
            CreateDietPlanInput, DietPlanDocument, DietPlanSummary, ExportFormat,
            GetDietPlansFilter, UpdateDietPlanInput,
        },
    },
};

/// Repository trait for diet plans
#[cfg_attr(test, mockall::automock)]
pub trait DietPlanRepository: Send + Sync {
    fn create_plan(&self, plan: DietPlan)
    -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn get_by_id(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<Option<DietPlan>, CoreError>> + Send;

    fn fetch_plans(
        &self,
        filter: GetDietPlansFilter,
    ) -> impl Future<Output = Result<Vec<DietPlan>, CoreError>> + Send;

    fn update_plan(&self, plan: DietPlan)
    -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn delete_plan(&self, plan_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Returns the number of plans removed.
    fn delete_by_patient(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

/// Service trait for diet plan authoring and export
pub trait DietPlanService: Send + Sync {
    fn get_diet_plans(
        &self,
        filter: GetDietPlansFilter,
    ) -> impl Future<Output = Result<Vec<DietPlan>, CoreError>> + Send;

    fn get_diet_plan(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn create_diet_plan(
        &self,
        input: CreateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn update_diet_plan(
        &self,
        input: UpdateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn delete_diet_plan(&self, plan_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_diet_plan_summary(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<DietPlanSummary, CoreError>> + Send;

    fn export_diet_plan(
        &self,
        plan_id: Uuid,
        format: ExportFormat,
    ) -> impl Future<Output = Result<DietPlanDocument, CoreError>> + Send;
}
