use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::appointment::entities::{Appointment, AppointmentStatus, AppointmentType};

#[derive(Debug, Clone)]
pub struct CreateAppointmentInput {
    pub patient_id: Uuid,
    pub date: DateTime<Utc>,
    pub appointment_type: AppointmentType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentInput {
    pub appointment_id: Uuid,
    pub date: Option<DateTime<Utc>>,
    pub appointment_type: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetAppointmentsFilter {
    pub patient_id: Option<Uuid>,
    pub status: Option<AppointmentStatus>,
    /// Inclusive lower bound on the appointment date.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on the appointment date.
    pub to: Option<DateTime<Utc>>,
}

impl GetAppointmentsFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.patient_id
            .is_none_or(|patient_id| appointment.patient_id == patient_id)
            && self.status.is_none_or(|status| appointment.status == status)
            && self.from.is_none_or(|from| appointment.date >= from)
            && self.to.is_none_or(|to| appointment.date < to)
    }
}
