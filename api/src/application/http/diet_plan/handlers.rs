pub mod create_diet_plan;
pub mod delete_diet_plan;
pub mod export_diet_plan;
pub mod get_diet_plan;
pub mod get_diet_plan_summary;
pub mod get_diet_plans;
pub mod update_diet_plan;
