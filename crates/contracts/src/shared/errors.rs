use crate::domain::a001_event::aggregate::EventId;
use thiserror::Error;

/// Failure while loading one of the static data resources
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The server answered with a non-success status
    #[error("HTTP {0}")]
    Http(u16),

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The response body is not the expected JSON document
    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("event {0} not found")]
    NotFound(EventId),

    /// The route parameter is not an integer
    #[error("invalid event id '{0}'")]
    InvalidId(String),
}
