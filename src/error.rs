use thiserror::Error;

/// Failure talking to the weather provider. All variants surface to the user as
/// the same fixed message; the variant keeps the concrete cause for logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("weather api error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed weather payload: {0}")]
    Malformed(String),
}

/// Rejected user answer. Recovered locally by re-prompting, never terminal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("answer shorter than {min} characters")]
    TooShort { min: usize },
}
