/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A requested date range violates the feed's window contract
    /// (unparseable date, reversed bounds, or span over the limit).
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// Upstream data failed a parse the core requires. Upstream
    /// payloads are otherwise trusted, so this fails the whole
    /// request instead of skipping the offending record.
    #[error("Malformed upstream data: {0}")]
    MalformedData(String),

    /// An internal invariant failed.
    #[error("Internal error: {0}")]
    Internal(String),
}
