use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// General dietary advice for a patient. Every field is required when the
/// value is parsed from model output; a missing field rejects the whole object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_foods: Vec<String>,
    pub foods_to_avoid: Vec<String>,
    pub dietary_guidelines: Vec<String>,
    pub lifestyle_recommendations: Vec<String>,
}

/// Advice scoped to a single meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealRecommendation {
    pub recommended_foods: Vec<String>,
    pub avoid_foods: Vec<String>,
    pub cooking_tips: Vec<String>,
    pub timing_guidance: String,
    pub ayurvedic_principles: Vec<String>,
}
