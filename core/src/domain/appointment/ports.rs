use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::Appointment,
        value_objects::{CreateAppointmentInput, GetAppointmentsFilter, UpdateAppointmentInput},
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for appointments. Listing is ordered by date.
#[cfg_attr(test, mockall::automock)]
pub trait AppointmentRepository: Send + Sync {
    fn create_appointment(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn get_by_id(
        &self,
        appointment_id: Uuid,
    ) -> impl Future<Output = Result<Option<Appointment>, CoreError>> + Send;

    fn fetch_appointments(
        &self,
        filter: GetAppointmentsFilter,
    ) -> impl Future<Output = Result<Vec<Appointment>, CoreError>> + Send;

    fn update_appointment(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn delete_appointment(
        &self,
        appointment_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Returns the number of appointments removed.
    fn delete_by_patient(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

/// Service trait for appointment scheduling
pub trait AppointmentService: Send + Sync {
    fn get_appointments(
        &self,
        filter: GetAppointmentsFilter,
    ) -> impl Future<Output = Result<Vec<Appointment>, CoreError>> + Send;

    fn get_appointment(
        &self,
        appointment_id: Uuid,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn create_appointment(
        &self,
        input: CreateAppointmentInput,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn update_appointment(
        &self,
        input: UpdateAppointmentInput,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn delete_appointment(
        &self,
        appointment_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
