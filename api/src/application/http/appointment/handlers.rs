pub mod create_appointment;
pub mod delete_appointment;
pub mod get_appointment;
pub mod get_appointments;
pub mod update_appointment;
