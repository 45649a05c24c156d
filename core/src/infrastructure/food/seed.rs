use crate::domain::food::entities::{
    AyurvedicProperties, DoshaEffect, DoshaEffectLevel, FoodCategory, FoodConfig, FoodItem, Guna,
    NutritionalInfo, Rasa, Vipaka, Virya,
};

use crate::domain::food::entities::DoshaEffectLevel::{Decreases as D, Increases as I, Neutral as N};

struct SeedFood {
    name: &'static str,
    category: FoodCategory,
    rasa: &'static [Rasa],
    guna: &'static [Guna],
    virya: Virya,
    vipaka: Vipaka,
    effect: [DoshaEffectLevel; 3],
    /// calories, protein, carbs, fat, fiber per serving
    nutrition: [f64; 5],
    serving_size: &'static str,
}

const SEED: &[SeedFood] = &[
    SeedFood {
        name: "Basmati Rice",
        category: FoodCategory::Grain,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Laghu, Guna::Snigdha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [D, D, N],
        nutrition: [205.0, 4.3, 45.0, 0.4, 0.6],
        serving_size: "1 cup cooked",
    },
    SeedFood {
        name: "Moong Dal",
        category: FoodCategory::Legume,
        rasa: &[Rasa::Madhura, Rasa::Kashaya],
        guna: &[Guna::Laghu, Guna::Ruksha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [N, D, D],
        nutrition: [212.0, 14.2, 38.7, 0.8, 15.4],
        serving_size: "1 cup cooked",
    },
    SeedFood {
        name: "Ghee",
        category: FoodCategory::Oil,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [D, D, I],
        nutrition: [112.0, 0.0, 0.0, 12.7, 0.0],
        serving_size: "1 tablespoon",
    },
    SeedFood {
        name: "Ginger",
        category: FoodCategory::Spice,
        rasa: &[Rasa::Katu],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Ushna,
        vipaka: Vipaka::Madhura,
        effect: [D, I, D],
        nutrition: [5.0, 0.1, 1.1, 0.0, 0.1],
        serving_size: "1 teaspoon grated",
    },
    SeedFood {
        name: "Turmeric",
        category: FoodCategory::Spice,
        rasa: &[Rasa::Tikta, Rasa::Katu],
        guna: &[Guna::Laghu, Guna::Ruksha],
        virya: Virya::Ushna,
        vipaka: Vipaka::Katu,
        effect: [N, N, D],
        nutrition: [9.0, 0.3, 2.0, 0.1, 0.7],
        serving_size: "1 teaspoon",
    },
    SeedFood {
        name: "Cumin",
        category: FoodCategory::Spice,
        rasa: &[Rasa::Katu, Rasa::Tikta],
        guna: &[Guna::Laghu, Guna::Ruksha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Katu,
        effect: [D, N, D],
        nutrition: [8.0, 0.4, 0.9, 0.5, 0.2],
        serving_size: "1 teaspoon",
    },
    SeedFood {
        name: "Chili Pepper",
        category: FoodCategory::Spice,
        rasa: &[Rasa::Katu],
        guna: &[Guna::Laghu, Guna::Ruksha],
        virya: Virya::Ushna,
        vipaka: Vipaka::Katu,
        effect: [I, I, D],
        nutrition: [18.0, 0.9, 4.0, 0.2, 0.7],
        serving_size: "1 pepper",
    },
    SeedFood {
        name: "Cucumber",
        category: FoodCategory::Vegetable,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Guru, Guna::Sheeta],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [I, D, I],
        nutrition: [16.0, 0.7, 3.6, 0.1, 0.5],
        serving_size: "1 cup sliced",
    },
    SeedFood {
        name: "Spinach",
        category: FoodCategory::Vegetable,
        rasa: &[Rasa::Kashaya, Rasa::Tikta],
        guna: &[Guna::Laghu, Guna::Ruksha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Katu,
        effect: [I, I, D],
        nutrition: [41.0, 5.3, 6.8, 0.5, 4.3],
        serving_size: "1 cup cooked",
    },
    SeedFood {
        name: "Sweet Potato",
        category: FoodCategory::Vegetable,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [D, D, I],
        nutrition: [180.0, 4.0, 41.4, 0.3, 6.6],
        serving_size: "1 medium baked",
    },
    SeedFood {
        name: "Mango",
        category: FoodCategory::Fruit,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Ushna,
        vipaka: Vipaka::Madhura,
        effect: [D, N, I],
        nutrition: [99.0, 1.4, 24.7, 0.6, 2.6],
        serving_size: "1 cup sliced",
    },
    SeedFood {
        name: "Coconut Water",
        category: FoodCategory::Other,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Laghu, Guna::Snigdha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [D, D, I],
        nutrition: [46.0, 1.7, 8.9, 0.5, 2.6],
        serving_size: "1 cup",
    },
    SeedFood {
        name: "Barley",
        category: FoodCategory::Grain,
        rasa: &[Rasa::Madhura, Rasa::Kashaya],
        guna: &[Guna::Laghu, Guna::Ruksha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [I, D, D],
        nutrition: [193.0, 3.5, 44.3, 0.7, 6.0],
        serving_size: "1 cup cooked",
    },
    SeedFood {
        name: "Almonds",
        category: FoodCategory::Other,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Ushna,
        vipaka: Vipaka::Madhura,
        effect: [D, I, I],
        nutrition: [164.0, 6.0, 6.1, 14.2, 3.5],
        serving_size: "1 ounce",
    },
    SeedFood {
        name: "Cow's Milk",
        category: FoodCategory::Dairy,
        rasa: &[Rasa::Madhura],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Sheeta,
        vipaka: Vipaka::Madhura,
        effect: [D, D, I],
        nutrition: [149.0, 7.7, 11.7, 7.9, 0.0],
        serving_size: "1 cup",
    },
    SeedFood {
        name: "Yogurt",
        category: FoodCategory::Dairy,
        rasa: &[Rasa::Amla],
        guna: &[Guna::Guru, Guna::Snigdha],
        virya: Virya::Ushna,
        vipaka: Vipaka::Amla,
        effect: [D, I, I],
        nutrition: [149.0, 8.5, 11.4, 8.0, 0.0],
        serving_size: "1 cup",
    },
];

/// Reference catalog loaded into the food repository at start-up.
pub fn seed_foods() -> Vec<FoodItem> {
    SEED.iter()
        .map(|seed| {
            let [vata, pitta, kapha] = seed.effect;
            let [calories, protein, carbs, fat, fiber] = seed.nutrition;

            FoodItem::new(FoodConfig {
                name: seed.name.to_string(),
                category: seed.category,
                ayurvedic: AyurvedicProperties {
                    rasa: seed.rasa.to_vec(),
                    guna: seed.guna.to_vec(),
                    virya: seed.virya,
                    vipaka: seed.vipaka,
                    dosha_effect: DoshaEffect { vata, pitta, kapha },
                },
                nutritional: NutritionalInfo {
                    calories,
                    protein,
                    carbs,
                    fat,
                    fiber,
                    vitamins: None,
                    minerals: None,
                },
                serving_size: seed.serving_size.to_string(),
                notes: None,
            })
        })
        .collect()
}
