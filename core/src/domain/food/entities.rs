use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7, food::value_objects::UpdateFoodInput, patient::entities::Dosha,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Grain,
    Vegetable,
    Fruit,
    Legume,
    Dairy,
    Spice,
    Oil,
    Meat,
    Other,
}

impl FoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Grain => "grain",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Legume => "legume",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Spice => "spice",
            FoodCategory::Oil => "oil",
            FoodCategory::Meat => "meat",
            FoodCategory::Other => "other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Taste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Rasa {
    Madhura,
    Amla,
    Lavana,
    Katu,
    Tikta,
    Kashaya,
}

impl Rasa {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rasa::Madhura => "Madhura",
            Rasa::Amla => "Amla",
            Rasa::Lavana => "Lavana",
            Rasa::Katu => "Katu",
            Rasa::Tikta => "Tikta",
            Rasa::Kashaya => "Kashaya",
        }
    }

    pub fn translation(&self) -> &'static str {
        match self {
            Rasa::Madhura => "Sweet",
            Rasa::Amla => "Sour",
            Rasa::Lavana => "Salty",
            Rasa::Katu => "Pungent",
            Rasa::Tikta => "Bitter",
            Rasa::Kashaya => "Astringent",
        }
    }
}

impl fmt::Display for Rasa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Guna {
    Guru,
    Laghu,
    Snigdha,
    Ruksha,
    Sheeta,
    Ushna,
}

impl Guna {
    pub fn translation(&self) -> &'static str {
        match self {
            Guna::Guru => "Heavy",
            Guna::Laghu => "Light",
            Guna::Snigdha => "Oily",
            Guna::Ruksha => "Dry",
            Guna::Sheeta => "Cold",
            Guna::Ushna => "Hot",
        }
    }
}

/// Potency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Virya {
    Sheeta,
    Ushna,
}

/// Post-digestive effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Vipaka {
    Madhura,
    Amla,
    Katu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DoshaEffectLevel {
    Increases,
    Decreases,
    Neutral,
}

impl DoshaEffectLevel {
    /// Single-letter code used when the catalog is rendered into a prompt.
    pub fn code(&self) -> char {
        match self {
            DoshaEffectLevel::Increases => 'I',
            DoshaEffectLevel::Decreases => 'D',
            DoshaEffectLevel::Neutral => 'N',
        }
    }

    /// Contribution of one unit of food to a dosha's net balance.
    pub fn weight(&self) -> f64 {
        match self {
            DoshaEffectLevel::Increases => 1.0,
            DoshaEffectLevel::Decreases => -1.0,
            DoshaEffectLevel::Neutral => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DoshaEffect {
    pub vata: DoshaEffectLevel,
    pub pitta: DoshaEffectLevel,
    pub kapha: DoshaEffectLevel,
}

impl DoshaEffect {
    pub fn for_dosha(&self, dosha: Dosha) -> DoshaEffectLevel {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Compact form such as `VD PI KN`.
    pub fn code(&self) -> String {
        format!(
            "V{} P{} K{}",
            self.vata.code(),
            self.pitta.code(),
            self.kapha.code()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AyurvedicProperties {
    pub rasa: Vec<Rasa>,
    pub guna: Vec<Guna>,
    pub virya: Virya,
    pub vipaka: Vipaka,
    pub dosha_effect: DoshaEffect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minerals: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub ayurvedic: AyurvedicProperties,
    pub nutritional: NutritionalInfo,
    pub serving_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub name: String,
    pub category: FoodCategory,
    pub ayurvedic: AyurvedicProperties,
    pub nutritional: NutritionalInfo,
    pub serving_size: String,
    pub notes: Option<String>,
}

impl FoodItem {
    pub fn new(config: FoodConfig) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: config.name,
            category: config.category,
            ayurvedic: config.ayurvedic,
            nutritional: config.nutritional,
            serving_size: config.serving_size,
            notes: config.notes,
        }
    }

    pub fn update(&mut self, input: UpdateFoodInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if let Some(ayurvedic) = input.ayurvedic {
            self.ayurvedic = ayurvedic;
        }
        if let Some(nutritional) = input.nutritional {
            self.nutritional = nutritional;
        }
        if let Some(serving_size) = input.serving_size {
            self.serving_size = serving_size;
        }
        if input.notes.is_some() {
            self.notes = input.notes;
        }
    }

    /// Name comparison used when matching free text against the catalog.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dosha_effect_code_uses_first_letter_of_each_effect() {
        let effect = DoshaEffect {
            vata: DoshaEffectLevel::Decreases,
            pitta: DoshaEffectLevel::Increases,
            kapha: DoshaEffectLevel::Neutral,
        };

        assert_eq!(effect.code(), "VD PI KN");
        assert_eq!(effect.for_dosha(Dosha::Pitta), DoshaEffectLevel::Increases);
    }

    #[test]
    fn translations_cover_every_taste_and_quality() {
        let tastes: Vec<_> = [
            Rasa::Madhura,
            Rasa::Amla,
            Rasa::Lavana,
            Rasa::Katu,
            Rasa::Tikta,
            Rasa::Kashaya,
        ]
        .iter()
        .map(Rasa::translation)
        .collect();
        assert_eq!(
            tastes,
            ["Sweet", "Sour", "Salty", "Pungent", "Bitter", "Astringent"]
        );

        assert_eq!(Guna::Snigdha.translation(), "Oily");
        assert_eq!(Guna::Sheeta.translation(), "Cold");
    }

    fn named(name: &str) -> FoodItem {
        FoodItem::new(FoodConfig {
            name: name.to_string(),
            category: FoodCategory::Other,
            ayurvedic: AyurvedicProperties {
                rasa: vec![Rasa::Madhura],
                guna: vec![],
                virya: Virya::Sheeta,
                vipaka: Vipaka::Madhura,
                dosha_effect: DoshaEffect {
                    vata: DoshaEffectLevel::Neutral,
                    pitta: DoshaEffectLevel::Neutral,
                    kapha: DoshaEffectLevel::Neutral,
                },
            },
            nutritional: NutritionalInfo {
                calories: 0.0,
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
                fiber: 0.0,
                vitamins: None,
                minerals: None,
            },
            serving_size: "1 cup".to_string(),
            notes: None,
        })
    }

    #[test]
    fn name_matching_ignores_case_and_padding() {
        assert!(named("Cow's Milk").matches_name("  cow's milk "));
        assert!(named("Ädzuki Beans").matches_name("ädzuki beans"));
        assert!(named("ÇAY").matches_name("çay"));
        assert!(!named("Ghee").matches_name("Ghee Rice"));
    }
}
