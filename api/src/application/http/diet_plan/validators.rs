use ayurdiet_core::domain::diet_plan::value_objects::MealInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDietPlanValidator {
    pub patient_id: Uuid,

    /// Length of the plan in days
    #[validate(range(min = 1, message = "duration must be at least one day"))]
    pub duration: u32,

    #[serde(default)]
    pub meals: Vec<MealInput>,

    #[serde(default)]
    pub guidelines: Vec<String>,

    #[serde(default)]
    pub restrictions: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDietPlanValidator {
    #[serde(default)]
    #[validate(range(min = 1, message = "duration must be at least one day"))]
    pub duration: Option<u32>,

    #[serde(default)]
    pub meals: Option<Vec<MealInput>>,

    #[serde(default)]
    pub guidelines: Option<Vec<String>>,

    #[serde(default)]
    pub restrictions: Option<Vec<String>>,

    #[serde(default)]
    pub notes: Option<String>,
}
