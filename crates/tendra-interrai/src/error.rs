use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    /// Raised when a caller routes a supplement-only record (the
    /// mental-health screener) through the primary-mapper registry.
    #[error("no primary mapper for assessment type: {0}")]
    NoPrimaryMapper(String),
}
