use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    appointment::value_objects::UpdateAppointmentInput, common::generate_uuid_v7,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    FollowUp,
    DietReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    /// New appointments always start out scheduled.
    pub fn new(
        patient_id: Uuid,
        date: DateTime<Utc>,
        appointment_type: AppointmentType,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            patient_id,
            date,
            appointment_type,
            status: AppointmentStatus::Scheduled,
            notes,
        }
    }

    pub fn update(&mut self, input: UpdateAppointmentInput) {
        if let Some(date) = input.date {
            self.date = date;
        }
        if let Some(appointment_type) = input.appointment_type {
            self.appointment_type = appointment_type;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if input.notes.is_some() {
            self.notes = input.notes;
        }
    }
}
