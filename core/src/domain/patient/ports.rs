use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    patient::{
        entities::Patient,
        value_objects::{CreatePatientInput, GetPatientsFilter, UpdatePatientInput},
    },
};

/// Repository trait for patient records
#[cfg_attr(test, mockall::automock)]
pub trait PatientRepository: Send + Sync {
    fn create_patient(
        &self,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn get_by_id(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Patient>, CoreError>> + Send;

    fn fetch_patients(
        &self,
        filter: GetPatientsFilter,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn update_patient(
        &self,
        patient: Patient,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn delete_patient(&self, patient_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for patient records
pub trait PatientService: Send + Sync {
    fn get_patients(
        &self,
        filter: GetPatientsFilter,
    ) -> impl Future<Output = Result<Vec<Patient>, CoreError>> + Send;

    fn get_patient(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn create_patient(
        &self,
        input: CreatePatientInput,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    fn update_patient(
        &self,
        input: UpdatePatientInput,
    ) -> impl Future<Output = Result<Patient, CoreError>> + Send;

    /// Removes the patient together with their diet plans and appointments.
    fn delete_patient(&self, patient_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
