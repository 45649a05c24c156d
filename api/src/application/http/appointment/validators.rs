use ayurdiet_core::domain::appointment::entities::{AppointmentStatus, AppointmentType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentValidator {
    pub patient_id: Uuid,

    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,

    #[serde(default)]
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentValidator {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    #[serde(default, rename = "type")]
    pub appointment_type: Option<AppointmentType>,

    #[serde(default)]
    pub status: Option<AppointmentStatus>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}
