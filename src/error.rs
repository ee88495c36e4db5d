use thiserror::Error;

/// Error surfaced verbatim from a [`UuidRepository`](crate::UuidRepository)
/// implementation.
pub type RepositoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents errors that can occur during UUID operations
#[derive(Debug, Error)]
pub enum UuidError {
    /// Error when constructing a UUID from a zero-valued 64-bit half
    #[error("invalid UUID: both 64-bit halves must be non-zero")]
    InvalidIdentifier,
    /// Error when the clock sequence stayed exhausted past the retry budget
    #[error("clock sequence exhausted; gave up after waiting {waited_ms} ms")]
    GenerationTimeout {
        /// Total time spent retrying before giving up
        waited_ms: u64,
    },
    /// Error propagated unchanged from the node-id repository
    #[error("node-id repository operation failed: {source}")]
    Repository {
        #[source]
        source: RepositoryError,
    },
}

impl UuidError {
    pub(crate) fn repository(source: RepositoryError) -> Self {
        Self::Repository { source }
    }
}
