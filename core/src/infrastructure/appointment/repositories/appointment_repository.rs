use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::Appointment, ports::AppointmentRepository, value_objects::GetAppointmentsFilter,
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create_appointment(&self, appointment: Appointment) -> Result<Appointment, CoreError> {
        self.appointments.write().await.push(appointment.clone());
        Ok(appointment)
    }

    async fn get_by_id(&self, appointment_id: Uuid) -> Result<Option<Appointment>, CoreError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.iter().find(|a| a.id == appointment_id).cloned())
    }

    async fn fetch_appointments(
        &self,
        filter: GetAppointmentsFilter,
    ) -> Result<Vec<Appointment>, CoreError> {
        let appointments = self.appointments.read().await;
        let mut matching: Vec<Appointment> = appointments
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();

        // Stable, so same-time appointments keep their booking order.
        matching.sort_by_key(|a| a.date);
        Ok(matching)
    }

    async fn update_appointment(&self, appointment: Appointment) -> Result<Appointment, CoreError> {
        let mut appointments = self.appointments.write().await;
        let slot = appointments
            .iter_mut()
            .find(|a| a.id == appointment.id)
            .ok_or(CoreError::NotFound)?;

        *slot = appointment.clone();
        Ok(appointment)
    }

    async fn delete_appointment(&self, appointment_id: Uuid) -> Result<(), CoreError> {
        let mut appointments = self.appointments.write().await;
        let before = appointments.len();
        appointments.retain(|a| a.id != appointment_id);

        if appointments.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_patient(&self, patient_id: Uuid) -> Result<usize, CoreError> {
        let mut appointments = self.appointments.write().await;
        let before = appointments.len();
        appointments.retain(|a| a.patient_id != patient_id);

        Ok(before - appointments.len())
    }
}
