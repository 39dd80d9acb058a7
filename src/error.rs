use rocket::http::Status;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an election operation.
///
/// All variants except [`Error::Persistence`] are the caller's fault and leave the
/// election untouched; they are safe to show to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    DuplicateVoter(String),
    #[error("{0}")]
    AlreadyVoted(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Storage failure: {0}")]
    Persistence(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// The HTTP status that best describes this error.
    pub fn status(&self) -> Status {
        match self {
            Self::Validation(_) => Status::BadRequest,
            Self::DuplicateVoter(_) | Self::AlreadyVoted(_) => Status::Conflict,
            Self::NotFound(_) => Status::NotFound,
            Self::Persistence(_) => Status::InternalServerError,
        }
    }

    /// The message that may cross the API boundary.
    /// Storage faults are reduced to a generic message; their detail stays in the server log.
    pub fn public_message(&self) -> String {
        match self {
            Self::Persistence(_) => "Internal storage error, please try again later".to_string(),
            other => other.to_string(),
        }
    }
}
