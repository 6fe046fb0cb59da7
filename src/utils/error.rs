use crate::utils::constraint::ConstraintViolations;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NullboundError {
    #[error("XML serialization failed: {0}")]
    SerializeError(#[from] quick_xml::SeError),

    #[error("XML deserialization failed: {0}")]
    DeserializeError(#[from] quick_xml::DeError),

    #[error("Constraint violations: {0}")]
    ConstraintError(ConstraintViolations),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Report serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, NullboundError>;
