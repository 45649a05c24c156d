use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    patient::{entities::Patient, ports::PatientRepository, value_objects::GetPatientsFilter},
};

/// Patients kept in insertion order. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientRepository {
    patients: Arc<RwLock<Vec<Patient>>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientRepository for InMemoryPatientRepository {
    async fn create_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        self.patients.write().await.push(patient.clone());
        Ok(patient)
    }

    async fn get_by_id(&self, patient_id: Uuid) -> Result<Option<Patient>, CoreError> {
        let patients = self.patients.read().await;
        Ok(patients.iter().find(|p| p.id == patient_id).cloned())
    }

    async fn fetch_patients(&self, filter: GetPatientsFilter) -> Result<Vec<Patient>, CoreError> {
        let patients = self.patients.read().await;
        Ok(patients.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn update_patient(&self, patient: Patient) -> Result<Patient, CoreError> {
        let mut patients = self.patients.write().await;
        let slot = patients
            .iter_mut()
            .find(|p| p.id == patient.id)
            .ok_or(CoreError::PatientNotFound)?;

        *slot = patient.clone();
        Ok(patient)
    }

    async fn delete_patient(&self, patient_id: Uuid) -> Result<(), CoreError> {
        let mut patients = self.patients.write().await;
        let before = patients.len();
        patients.retain(|p| p.id != patient_id);

        if patients.len() == before {
            return Err(CoreError::PatientNotFound);
        }
        Ok(())
    }
}
