use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{
        entities::{DietPlan, DietPlanConfig},
        export::{export_filename, generate_diet_plan_csv, generate_diet_plan_html},
        helpers::{calculate_dosha_balance, calculate_nutrition_totals},
        ports::{DietPlanRepository, DietPlanService},
        value_objects::{
            CreateDietPlanInput, DietPlanDocument, DietPlanSummary, ExportFormat,
            GetDietPlansFilter, MealInput, UpdateDietPlanInput,
        },
    },
    food::{entities::FoodItem, ports::FoodRepository, value_objects::GetFoodsFilter},
    patient::ports::PatientRepository,
    recommendation::ports::TextGenerationClient,
};

fn ensure_valid_duration(duration: u32) -> Result<(), CoreError> {
    if duration == 0 {
        return Err(CoreError::Invalid(
            "plan duration must be at least one day".to_string(),
        ));
    }
    Ok(())
}

fn ensure_known_foods(meals: &[MealInput], foods: &[FoodItem]) -> Result<(), CoreError> {
    for item in meals.iter().flat_map(|meal| meal.items.iter()) {
        if !foods.iter().any(|food| food.id == item.food_id) {
            return Err(CoreError::Invalid(format!(
                "unknown food id {}",
                item.food_id
            )));
        }
        if !item.quantity.is_finite() || item.quantity <= 0.0 {
            return Err(CoreError::Invalid(format!(
                "quantity for food {} must be positive",
                item.food_id
            )));
        }
    }
    Ok(())
}

impl<P, F, D, A, LLM> DietPlanService for Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    async fn get_diet_plans(&self, filter: GetDietPlansFilter) -> Result<Vec<DietPlan>, CoreError> {
        self.diet_plan_repository.fetch_plans(filter).await
    }

    async fn get_diet_plan(&self, plan_id: Uuid) -> Result<DietPlan, CoreError> {
        self.diet_plan_repository
            .get_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_diet_plan(&self, input: CreateDietPlanInput) -> Result<DietPlan, CoreError> {
        ensure_valid_duration(input.duration)?;

        self.patient_repository
            .get_by_id(input.patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)?;

        let foods = self
            .food_repository
            .fetch_foods(GetFoodsFilter::default())
            .await?;
        ensure_known_foods(&input.meals, &foods)?;

        let plan = DietPlan::new(DietPlanConfig {
            patient_id: input.patient_id,
            duration: input.duration,
            meals: input.meals,
            guidelines: input.guidelines,
            restrictions: input.restrictions,
            notes: input.notes,
        });

        self.diet_plan_repository.create_plan(plan).await
    }

    async fn update_diet_plan(&self, input: UpdateDietPlanInput) -> Result<DietPlan, CoreError> {
        if let Some(duration) = input.duration {
            ensure_valid_duration(duration)?;
        }

        let mut plan = self
            .diet_plan_repository
            .get_by_id(input.plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(meals) = &input.meals {
            let foods = self
                .food_repository
                .fetch_foods(GetFoodsFilter::default())
                .await?;
            ensure_known_foods(meals, &foods)?;
        }

        plan.update(input);

        self.diet_plan_repository.update_plan(plan).await
    }

    async fn delete_diet_plan(&self, plan_id: Uuid) -> Result<(), CoreError> {
        self.diet_plan_repository
            .get_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.diet_plan_repository.delete_plan(plan_id).await
    }

    async fn get_diet_plan_summary(&self, plan_id: Uuid) -> Result<DietPlanSummary, CoreError> {
        let plan = self
            .diet_plan_repository
            .get_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let foods = self
            .food_repository
            .fetch_foods(GetFoodsFilter::default())
            .await?;

        Ok(DietPlanSummary {
            plan_id: plan.id,
            patient_id: plan.patient_id,
            nutrition: calculate_nutrition_totals(&plan.meals, &foods).rounded(),
            dosha_balance: calculate_dosha_balance(&plan.meals, &foods),
        })
    }

    #[instrument(skip(self))]
    async fn export_diet_plan(
        &self,
        plan_id: Uuid,
        format: ExportFormat,
    ) -> Result<DietPlanDocument, CoreError> {
        let plan = self
            .diet_plan_repository
            .get_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        let patient = self
            .patient_repository
            .get_by_id(plan.patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)?;
        let foods = self
            .food_repository
            .fetch_foods(GetFoodsFilter::default())
            .await?;

        let body = match format {
            ExportFormat::Csv => generate_diet_plan_csv(&plan, &patient, &foods),
            ExportFormat::Html => {
                generate_diet_plan_html(&plan, &patient, &foods, Utc::now().date_naive())?
            }
        };

        Ok(DietPlanDocument {
            filename: export_filename(&patient, format.extension()),
            format,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::test_support::{TestService, seeded_service},
        diet_plan::entities::MealItem,
        food::ports::FoodService,
        patient::{
            entities::{Dosha, Gender, Patient, Prakriti},
            ports::PatientService,
            value_objects::CreatePatientInput,
        },
    };

    async fn patient(service: &TestService) -> Patient {
        service
            .create_patient(CreatePatientInput {
                name: "Asha Rao".to_string(),
                age: 34,
                gender: Gender::Female,
                contact: "asha@example.com".to_string(),
                prakriti: Prakriti::new(20, 30, 50),
                current_conditions: vec![],
                allergies: vec![],
                dietary_restrictions: vec![],
                last_visit: None,
            })
            .await
            .unwrap()
    }

    async fn food_id(service: &TestService, name: &str) -> Uuid {
        service
            .get_foods(GetFoodsFilter {
                category: None,
                search: Some(name.to_string()),
            })
            .await
            .unwrap()
            .into_iter()
            .find(|food| food.matches_name(name))
            .map(|food| food.id)
            .unwrap()
    }

    fn plan_input(patient_id: Uuid, items: Vec<MealItem>) -> CreateDietPlanInput {
        CreateDietPlanInput {
            patient_id,
            duration: 14,
            meals: vec![MealInput {
                name: "Lunch".to_string(),
                time: "12:30".to_string(),
                items,
            }],
            guidelines: vec!["Eat warm food".to_string()],
            restrictions: vec![],
            notes: None,
        }
    }

    fn item(food_id: Uuid, quantity: f64) -> MealItem {
        MealItem {
            food_id,
            quantity,
            unit: "serving".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn plan_for_unknown_patient_is_rejected() {
        let service = seeded_service();

        let result = service
            .create_diet_plan(plan_input(Uuid::new_v4(), vec![]))
            .await;

        assert_eq!(result, Err(CoreError::PatientNotFound));
    }

    #[tokio::test]
    async fn unknown_food_id_is_invalid() {
        let service = seeded_service();
        let patient = patient(&service).await;

        let result = service
            .create_diet_plan(plan_input(patient.id, vec![item(Uuid::new_v4(), 1.0)]))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn zero_duration_is_invalid() {
        let service = seeded_service();
        let patient = patient(&service).await;
        let mut input = plan_input(patient.id, vec![]);
        input.duration = 0;

        assert!(matches!(
            service.create_diet_plan(input).await,
            Err(CoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn summary_totals_and_balance() {
        let service = seeded_service();
        let patient = patient(&service).await;
        let ghee = food_id(&service, "Ghee").await;
        let ginger = food_id(&service, "Ginger").await;

        let plan = service
            .create_diet_plan(plan_input(
                patient.id,
                vec![item(ghee, 2.0), item(ginger, 1.0)],
            ))
            .await
            .unwrap();

        let summary = service.get_diet_plan_summary(plan.id).await.unwrap();

        // Ghee 112 kcal x 2 + Ginger 5 kcal
        assert_eq!(summary.nutrition.calories, 229.0);
        // Ghee decreases vata twice, ginger once more.
        assert_eq!(summary.dosha_balance.vata, -3.0);
        assert_eq!(summary.dosha_balance.pitta, -1.0);
        assert_eq!(summary.dosha_balance.kapha, 1.0);
        assert_eq!(summary.dosha_balance.aggravated_doshas, vec![Dosha::Kapha]);
    }

    #[tokio::test]
    async fn list_filters_by_patient() {
        let service = seeded_service();
        let first = patient(&service).await;
        let second = patient(&service).await;

        service.create_diet_plan(plan_input(first.id, vec![])).await.unwrap();
        service.create_diet_plan(plan_input(second.id, vec![])).await.unwrap();

        let plans = service
            .get_diet_plans(GetDietPlansFilter {
                patient_id: Some(second.id),
            })
            .await
            .unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].patient_id, second.id);
    }

    #[tokio::test]
    async fn export_names_file_after_patient() {
        let service = seeded_service();
        let patient = patient(&service).await;
        let rice = food_id(&service, "Basmati Rice").await;
        let plan = service
            .create_diet_plan(plan_input(patient.id, vec![item(rice, 1.0)]))
            .await
            .unwrap();

        let csv = service
            .export_diet_plan(plan.id, ExportFormat::Csv)
            .await
            .unwrap();
        let html = service
            .export_diet_plan(plan.id, ExportFormat::Html)
            .await
            .unwrap();

        assert_eq!(csv.filename, "diet-plan-Asha-Rao.csv");
        assert!(csv.body.contains("Lunch,12:30,Basmati Rice,1,serving"));
        assert_eq!(html.filename, "diet-plan-Asha-Rao.html");
        assert!(html.body.contains("Basmati Rice"));
    }

    #[tokio::test]
    async fn update_replaces_meals() {
        let service = seeded_service();
        let patient = patient(&service).await;
        let plan = service
            .create_diet_plan(plan_input(patient.id, vec![]))
            .await
            .unwrap();

        let updated = service
            .update_diet_plan(UpdateDietPlanInput {
                plan_id: plan.id,
                notes: Some("Review in two weeks".to_string()),
                meals: Some(vec![]),
                ..UpdateDietPlanInput::default()
            })
            .await
            .unwrap();

        assert!(updated.meals.is_empty());
        assert_eq!(updated.notes.as_deref(), Some("Review in two weeks"));
        assert_eq!(updated.duration, 14);
    }
}
