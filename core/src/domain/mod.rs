pub mod appointment;
pub mod common;
pub mod diet_plan;
pub mod food;
pub mod patient;
pub mod recommendation;
