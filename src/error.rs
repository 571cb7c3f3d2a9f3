use thiserror::Error;

/// Top-level error type for the riverine network-analysis kernel.
#[derive(Debug, Error)]
pub enum RiverineError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors related to the network store.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("segment not found in network store")]
    SegmentNotFound,
}

/// Errors related to trace operations.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),

    #[error("barrier radius {0} must be finite and non-negative")]
    InvalidBarrierRadius(f64),
}

/// Convenience type alias for results using [`RiverineError`].
pub type Result<T> = std::result::Result<T, RiverineError>;
