use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::patient::entities::{Dosha, Gender, Prakriti};

#[derive(Debug, Clone)]
pub struct CreatePatientInput {
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

#[derive(Debug, Clone, Default)]
pub struct UpdatePatientInput {
    pub patient_id: Uuid,
    pub name: Option<String>,
    pub age: Option<u16>,
    pub gender: Option<Gender>,
    pub contact: Option<String>,
    pub prakriti: Option<Prakriti>,
    pub current_conditions: Option<Vec<String>>,
    pub allergies: Option<Vec<String>>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub last_visit: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct GetPatientsFilter {
    /// Case-insensitive substring match on the patient name.
    pub search: Option<String>,
    pub dominant_dosha: Option<Dosha>,
}

impl GetPatientsFilter {
    pub fn matches(&self, patient: &crate::domain::patient::entities::Patient) -> bool {
        if let Some(search) = &self.search
            && !patient.name.to_lowercase().contains(&search.to_lowercase())
        {
            return false;
        }

        match self.dominant_dosha {
            Some(dosha) => patient.prakriti.dominant_dosha == dosha,
            None => true,
        }
    }
}
