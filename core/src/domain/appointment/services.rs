use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::Appointment,
        ports::{AppointmentRepository, AppointmentService},
        value_objects::{CreateAppointmentInput, GetAppointmentsFilter, UpdateAppointmentInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::ports::DietPlanRepository,
    food::ports::FoodRepository,
    patient::ports::PatientRepository,
    recommendation::ports::TextGenerationClient,
};

impl<P, F, D, A, LLM> AppointmentService for Service<P, F, D, A, LLM>
where
    P: PatientRepository,
    F: FoodRepository,
    D: DietPlanRepository,
    A: AppointmentRepository,
    LLM: TextGenerationClient,
{
    async fn get_appointments(
        &self,
        filter: GetAppointmentsFilter,
    ) -> Result<Vec<Appointment>, CoreError> {
        self.appointment_repository.fetch_appointments(filter).await
    }

    async fn get_appointment(&self, appointment_id: Uuid) -> Result<Appointment, CoreError> {
        self.appointment_repository
            .get_by_id(appointment_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_appointment(
        &self,
        input: CreateAppointmentInput,
    ) -> Result<Appointment, CoreError> {
        self.patient_repository
            .get_by_id(input.patient_id)
            .await?
            .ok_or(CoreError::PatientNotFound)?;

        let appointment = Appointment::new(
            input.patient_id,
            input.date,
            input.appointment_type,
            input.notes,
        );

        self.appointment_repository
            .create_appointment(appointment)
            .await
    }

    async fn update_appointment(
        &self,
        input: UpdateAppointmentInput,
    ) -> Result<Appointment, CoreError> {
        let mut appointment = self
            .appointment_repository
            .get_by_id(input.appointment_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        appointment.update(input);

        self.appointment_repository
            .update_appointment(appointment)
            .await
    }

    async fn delete_appointment(&self, appointment_id: Uuid) -> Result<(), CoreError> {
        self.appointment_repository
            .get_by_id(appointment_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.appointment_repository
            .delete_appointment(appointment_id)
            .await
    }
}
