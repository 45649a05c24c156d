use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    diet_plan::value_objects::{MealInput, UpdateDietPlanInput},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub food_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    /// Free-form time of day as entered by the practitioner, e.g. `08:00`.
    pub time: String,
    pub items: Vec<MealItem>,
}

impl From<MealInput> for Meal {
    fn from(input: MealInput) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: input.name,
            time: input.time,
            items: input.items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Length of the plan in days.
    pub duration: u32,
    pub meals: Vec<Meal>,
    pub guidelines: Vec<String>,
    pub restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DietPlanConfig {
    pub patient_id: Uuid,
    pub duration: u32,
    pub meals: Vec<MealInput>,
    pub guidelines: Vec<String>,
    pub restrictions: Vec<String>,
    pub notes: Option<String>,
}

impl DietPlan {
    pub fn new(config: DietPlanConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            patient_id: config.patient_id,
            created_at: now,
            duration: config.duration,
            meals: config.meals.into_iter().map(Meal::from).collect(),
            guidelines: config.guidelines,
            restrictions: config.restrictions,
            notes: config.notes,
        }
    }

    pub fn update(&mut self, input: UpdateDietPlanInput) {
        if let Some(duration) = input.duration {
            self.duration = duration;
        }
        if let Some(meals) = input.meals {
            self.meals = meals.into_iter().map(Meal::from).collect();
        }
        if let Some(guidelines) = input.guidelines {
            self.guidelines = guidelines;
        }
        if let Some(restrictions) = input.restrictions {
            self.restrictions = restrictions;
        }
        if input.notes.is_some() {
            self.notes = input.notes;
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        self.meals.iter().flat_map(|meal| meal.items.iter())
    }
}
