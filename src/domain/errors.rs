/// Simplified error system - the catalog has exactly one failure kind.
///
/// A `FetchError` models a transient repository failure and carries the
/// user-facing message the error view renders verbatim. A missing deal is
/// NOT a failure - `get_deal` resolves to `Ok(None)` for unknown ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

// Simple convenience alias used by the repository and the controller
pub type FetchResult<T> = Result<T, FetchError>;
