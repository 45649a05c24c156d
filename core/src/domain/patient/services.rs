use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::ports::FoodRepository,
    patient::{
        entities::{Patient, PatientConfig, Prakriti},
        ports::{PatientRepository, PatientService},
        value_objects::{CreatePatientInput, GetPatientsFilter, UpdatePatientInput},
    },
    recommendation::ports::TextGenerationClient,
};

fn ensure_valid_prakriti(prakriti: &Prakriti) -> Result<(), CoreError> {
    if prakriti.is_valid() {
        Ok(())
    } else {
        Err(CoreError::Invalid(
            "dosha percentages must be between 0 and 100".to_string(),
        ))
    }
}

impl<P, F, D, A, LLM> PatientService for Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    async fn get_patients(&self, filter: GetPatientsFilter) -> Result<Vec<Patient>, CoreError> {
        self.patient_repository.fetch_patients(filter).await
    }

    async fn get_patient(&self, patient_id: Uuid) -> Result<Patient, CoreError> {
        self.patient_repository
            .get_by_id(patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)
    }

    async fn create_patient(&self, input: CreatePatientInput) -> Result<Patient, CoreError> {
        ensure_valid_prakriti(&input.prakriti)?;

        let patient = Patient::new(PatientConfig {
            name: input.name,
            age: input.age,
            gender: input.gender,
            contact: input.contact,
            prakriti: input.prakriti,
            current_conditions: input.current_conditions,
            allergies: input.allergies,
            dietary_restrictions: input.dietary_restrictions,
            last_visit: input.last_visit,
        });

        self.patient_repository.create_patient(patient).await
    }

    async fn update_patient(&self, input: UpdatePatientInput) -> Result<Patient, CoreError> {
        if let Some(prakriti) = &input.prakriti {
            ensure_valid_prakriti(prakriti)?;
        }

        let mut patient = self
            .patient_repository
            .get_by_id(input.patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)?;

        patient.update(input);

        self.patient_repository.update_patient(patient).await
    }

    #[instrument(skip(self))]
    async fn delete_patient(&self, patient_id: Uuid) -> Result<(), CoreError> {
        self.patient_repository
            .get_by_id(patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)?;

        let plans = self
            .diet_plan_repository
            .delete_by_patient(patient_id)
            .await?;
        let appointments = self
            .appointment_repository
            .delete_by_patient(patient_id)
            .await?;

        self.patient_repository.delete_patient(patient_id).await?;

        info!(
            removed_diet_plans = plans,
            removed_appointments = appointments,
            "patient deleted"
        );

        Ok(())
    }
}
