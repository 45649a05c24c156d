pub mod patient_repository;

pub use patient_repository::*;
