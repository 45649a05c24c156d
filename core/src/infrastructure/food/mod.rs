pub mod repositories;
pub mod seed;
