pub mod food_repository;

pub use food_repository::*;
