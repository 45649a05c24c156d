pub mod appointment;
pub mod diet_plan;
pub mod food;
pub mod llm;
pub mod patient;
