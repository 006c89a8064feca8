use thiserror::Error;

/// Failures of the order actor itself.
///
/// Business outcomes (duplicate id, bad format, expired window) are not
/// errors; they come back as a [`Response`](crate::domain::Response).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
