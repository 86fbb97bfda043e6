/// Failure reported by a page fetcher
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Any non-success status; a 404 and a 500 look the same here
    #[error("page not found: {url} (HTTP {status})")]
    NotFound { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty document")]
    EmptyDocument,

    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Outcome of a failed dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("word not found")]
    NotFound,

    #[error("failed to fetch page: {0}")]
    Fetch(FetchError),

    #[error("failed to parse page: {0}")]
    Parse(#[from] ParseError),

    #[error("lookup cancelled")]
    Cancelled,

    #[error("lookup task failed: {0}")]
    Task(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

impl From<FetchError> for LookupError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::NotFound { .. } => Self::NotFound,
            FetchError::Cancelled => Self::Cancelled,
            FetchError::Transport { .. } => Self::Fetch(error),
        }
    }
}

impl From<tokio::task::JoinError> for LookupError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Task(error.to_string())
        }
    }
}
