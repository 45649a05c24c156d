use ayurdiet_core::domain::patient::entities::PatientProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Same bounds `/patients` enforces on stored records.
fn validate_profile(profile: &PatientProfile) -> Result<(), ValidationError> {
    if !profile.prakriti.is_valid() {
        return Err(ValidationError::new("prakriti")
            .with_message("each dosha share must be at most 100".into()));
    }

    if profile.age > 150 {
        return Err(ValidationError::new("age").with_message("age must be at most 150".into()));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecommendationsValidator {
    #[validate(custom(function = "validate_profile"))]
    pub patient: PatientProfile,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealRecommendationsValidator {
    #[validate(custom(function = "validate_profile"))]
    pub patient: PatientProfile,

    /// `Breakfast`, `Lunch` or `Dinner`
    #[serde(default)]
    pub meal_type: Option<String>,

    #[serde(default)]
    pub time_of_day: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayurdiet_core::domain::patient::entities::{Gender, Prakriti};

    fn payload(age: u16, vata: u8) -> GenerateRecommendationsValidator {
        GenerateRecommendationsValidator {
            patient: PatientProfile {
                name: "Asha Rao".to_string(),
                age,
                gender: Gender::Female,
                prakriti: Prakriti::new(vata, 25, 15),
                current_conditions: vec![],
                allergies: vec![],
                dietary_restrictions: vec![],
            },
        }
    }

    #[test]
    fn profile_bounds_match_patient_records() {
        assert!(payload(34, 60).validate().is_ok());
        assert!(payload(34, 250).validate().is_err());
        assert!(payload(9000, 60).validate().is_err());
    }
}
