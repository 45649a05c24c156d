pub mod create_patient;
pub mod delete_patient;
pub mod get_patient;
pub mod get_patients;
pub mod update_patient;
