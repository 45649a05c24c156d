pub mod generate_meal_recommendations;
pub mod generate_patient_recommendations;
pub mod generate_recommendations;
