pub mod diet_plan_repository;

pub use diet_plan_repository::*;
