use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Patient not found")]
    PatientNotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Text generation failed: {0}")]
    GenerationFailed(String),

    #[error("Internal server error")]
    InternalServerError,
}
