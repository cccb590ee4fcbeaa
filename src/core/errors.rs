use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReibunError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Sentence endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Sentence endpoint returned no completion text")]
    EmptyCompletion,

    #[error("No sentence policy configured for deck {0}")]
    MissingPolicy(u64),

    #[error("Card has no usable field at index {0}")]
    MissingWordField(usize),

    #[error("ReibunError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ReibunError {
    fn from(error: std::io::Error) -> Self {
        ReibunError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ReibunError {
    fn from(error: reqwest::Error) -> Self {
        ReibunError::Reqwest(Box::new(error))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Protocol,
    Auth,
    Config,
}

/// Fetch outcome that crosses the task channel. Unlike `ReibunError` it is
/// `Clone`, so the underlying error is flattened into kind + message here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<ReibunError> for FetchFailure {
    fn from(error: ReibunError) -> Self {
        let kind = match &error {
            ReibunError::MissingApiKey => FailureKind::Auth,
            ReibunError::Reqwest(e) if e.is_decode() => FailureKind::Protocol,
            ReibunError::Reqwest(_) | ReibunError::Io(_) => FailureKind::Network,
            ReibunError::Json(_)
            | ReibunError::HttpStatus { .. }
            | ReibunError::EmptyCompletion
            | ReibunError::Custom(_) => FailureKind::Protocol,
            ReibunError::MissingPolicy(_) | ReibunError::MissingWordField(_) => FailureKind::Config,
        };

        Self { kind, message: error.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_maps_to_protocol() {
        let failure = FetchFailure::from(ReibunError::HttpStatus { status: 500 });
        assert_eq!(failure.kind, FailureKind::Protocol);
        assert!(failure.message.contains("500"));
    }

    #[test]
    fn missing_key_maps_to_auth() {
        let failure = FetchFailure::from(ReibunError::MissingApiKey);
        assert_eq!(failure.kind, FailureKind::Auth);
    }

    #[test]
    fn missing_policy_maps_to_config() {
        let failure = FetchFailure::from(ReibunError::MissingPolicy(42));
        assert_eq!(failure.kind, FailureKind::Config);
        assert!(failure.message.contains("42"));
    }
}
