/// Type alias for Result with anyhow::Error as the error type.
///
/// Adapters and the application layer use this; the resolution engine
/// itself returns `ResolveError` so callers can match on the failure kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
