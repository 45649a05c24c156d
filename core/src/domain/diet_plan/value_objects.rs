use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::diet_plan::{
    entities::MealItem,
    helpers::{DoshaBalance, NutritionTotals},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealInput {
    pub name: String,
    pub time: String,
    #[serde(default)]
    pub items: Vec<MealItem>,
}

#[derive(Debug, Clone)]
pub struct CreateDietPlanInput {
    pub patient_id: Uuid,
    pub duration: u32,
    pub meals: Vec<MealInput>,
    pub guidelines: Vec<String>,
    pub restrictions: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDietPlanInput {
    pub plan_id: Uuid,
    pub duration: Option<u32>,
    pub meals: Option<Vec<MealInput>>,
    pub guidelines: Option<Vec<String>>,
    pub restrictions: Option<Vec<String>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetDietPlansFilter {
    pub patient_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanSummary {
    pub plan_id: Uuid,
    pub patient_id: Uuid,
    pub nutrition: NutritionTotals,
    pub dosha_balance: DoshaBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Html,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
        }
    }
}

/// A rendered export ready to be sent as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietPlanDocument {
    pub filename: String,
    pub format: ExportFormat,
    pub body: String,
}
