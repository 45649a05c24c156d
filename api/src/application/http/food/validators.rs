use ayurdiet_core::domain::food::entities::{AyurvedicProperties, FoodCategory, NutritionalInfo};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub category: FoodCategory,

    pub ayurvedic: AyurvedicProperties,

    pub nutritional: NutritionalInfo,

    #[validate(length(min = 1, message = "servingSize is required"))]
    pub serving_size: String,

    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<FoodCategory>,

    #[serde(default)]
    pub ayurvedic: Option<AyurvedicProperties>,

    #[serde(default)]
    pub nutritional: Option<NutritionalInfo>,

    #[serde(default)]
    pub serving_size: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}
