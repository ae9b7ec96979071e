use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown assessment type: {0}")]
    UnknownAssessmentType(String),

    #[error("unknown scenario axis: {0}")]
    UnknownScenarioAxis(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
