pub mod appointment;
pub mod diet_plan;
pub mod food;
pub mod health;
pub mod patient;
pub mod recommendation;
pub mod server;
