/// Type alias for Result with anyhow::Error as the error type.
/// Upstream failures travel through this type unchanged.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
