use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, patient::value_objects::UpdatePatientInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dosha::Vata => "Air & Space - Movement, creativity, quick thinking",
            Dosha::Pitta => "Fire & Water - Transformation, metabolism, intelligence",
            Dosha::Kapha => "Earth & Water - Structure, stability, nourishment",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A patient's constitution. The dominant dosha is always derived from the
/// three percentages; a value sent by a client is discarded on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "PrakritiShares")]
pub struct Prakriti {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
    pub dominant_dosha: Dosha,
}

#[derive(Deserialize)]
struct PrakritiShares {
    vata: u8,
    pitta: u8,
    kapha: u8,
}

impl From<PrakritiShares> for Prakriti {
    fn from(shares: PrakritiShares) -> Self {
        Prakriti::new(shares.vata, shares.pitta, shares.kapha)
    }
}

impl Prakriti {
    pub fn new(vata: u8, pitta: u8, kapha: u8) -> Self {
        Self {
            vata,
            pitta,
            kapha,
            dominant_dosha: calculate_dominant_dosha(vata, pitta, kapha),
        }
    }

    /// Each share is a percentage; the total is not enforced.
    pub fn is_valid(&self) -> bool {
        self.vata <= 100 && self.pitta <= 100 && self.kapha <= 100
    }
}

/// Largest share wins; ties go to vata, then pitta.
pub fn calculate_dominant_dosha(vata: u8, pitta: u8, kapha: u8) -> Dosha {
    if vata >= pitta && vata >= kapha {
        Dosha::Vata
    } else if pitta >= kapha {
        Dosha::Pitta
    } else {
        Dosha::Kapha
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u16,
    pub gender: Gender,
    pub contact: String,
    pub prakriti: Prakriti,
    pub current_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_visit: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PatientConfig {
    pub name: String,
    pub age: u16,
    pub gender: Gender,
    pub contact: String,
    pub prakriti: Prakriti,
    pub current_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub last_visit: Option<DateTime<Utc>>,
}

impl Patient {
    pub fn new(config: PatientConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            age: config.age,
            gender: config.gender,
            contact: config.contact,
            prakriti: config.prakriti,
            current_conditions: config.current_conditions,
            allergies: config.allergies,
            dietary_restrictions: config.dietary_restrictions,
            created_at: now,
            last_visit: config.last_visit,
        }
    }

    pub fn update(&mut self, input: UpdatePatientInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(age) = input.age {
            self.age = age;
        }
        if let Some(gender) = input.gender {
            self.gender = gender;
        }
        if let Some(contact) = input.contact {
            self.contact = contact;
        }
        if let Some(prakriti) = input.prakriti {
            self.prakriti = prakriti;
        }
        if let Some(conditions) = input.current_conditions {
            self.current_conditions = conditions;
        }
        if let Some(allergies) = input.allergies {
            self.allergies = allergies;
        }
        if let Some(restrictions) = input.dietary_restrictions {
            self.dietary_restrictions = restrictions;
        }
        if input.last_visit.is_some() {
            self.last_visit = input.last_visit;
        }
    }

    pub fn profile(&self) -> PatientProfile {
        PatientProfile::from(self)
    }
}

/// The slice of a patient record the recommendation pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub name: String,
    pub age: u16,
    pub gender: Gender,
    pub prakriti: Prakriti,
    #[serde(default)]
    pub current_conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl From<&Patient> for PatientProfile {
    fn from(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender,
            prakriti: patient.prakriti,
            current_conditions: patient.current_conditions.clone(),
            allergies: patient.allergies.clone(),
            dietary_restrictions: patient.dietary_restrictions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_dosha_takes_the_largest_share() {
        assert_eq!(calculate_dominant_dosha(50, 30, 20), Dosha::Vata);
        assert_eq!(calculate_dominant_dosha(10, 80, 10), Dosha::Pitta);
        assert_eq!(calculate_dominant_dosha(20, 30, 50), Dosha::Kapha);
    }

    #[test]
    fn dominant_dosha_ties_prefer_vata_then_pitta() {
        assert_eq!(calculate_dominant_dosha(40, 40, 20), Dosha::Vata);
        assert_eq!(calculate_dominant_dosha(20, 40, 40), Dosha::Pitta);
        assert_eq!(calculate_dominant_dosha(34, 33, 34), Dosha::Vata);
        assert_eq!(calculate_dominant_dosha(0, 0, 0), Dosha::Vata);
    }

    #[test]
    fn client_supplied_dominant_dosha_is_recomputed() {
        let prakriti: Prakriti = serde_json::from_str(
            r#"{"vata": 10, "pitta": 20, "kapha": 70, "dominantDosha": "Vata"}"#,
        )
        .unwrap();

        assert_eq!(prakriti.dominant_dosha, Dosha::Kapha);
        let json = serde_json::to_value(prakriti).unwrap();
        assert_eq!(json["dominantDosha"], "Kapha");
    }

    #[test]
    fn profile_ignores_extra_patient_fields() {
        let profile: PatientProfile = serde_json::from_str(
            r#"{
                "id": "p-1",
                "name": "Asha",
                "age": 34,
                "gender": "female",
                "contact": "asha@example.com",
                "prakriti": {"vata": 20, "pitta": 60, "kapha": 20},
                "currentConditions": ["Acidity"]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.prakriti.dominant_dosha, Dosha::Pitta);
        assert_eq!(profile.current_conditions, vec!["Acidity".to_string()]);
        assert!(profile.allergies.is_empty());
    }
}
