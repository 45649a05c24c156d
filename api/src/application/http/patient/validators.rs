use ayurdiet_core::domain::patient::entities::{Gender, Prakriti};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(max = 150, message = "age must be at most 150"))]
    pub age: u16,

    pub gender: Gender,

    #[serde(default)]
    pub contact: String,

    pub prakriti: Prakriti,

    #[serde(default)]
    pub current_conditions: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub last_visit: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(range(max = 150, message = "age must be at most 150"))]
    pub age: Option<u16>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub contact: Option<String>,

    #[serde(default)]
    pub prakriti: Option<Prakriti>,

    #[serde(default)]
    pub current_conditions: Option<Vec<String>>,

    #[serde(default)]
    pub allergies: Option<Vec<String>>,

    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,

    #[serde(default)]
    pub last_visit: Option<DateTime<Utc>>,
}
