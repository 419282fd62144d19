use thiserror::Error;
use tonic::Status;

/// Rejection raised by the guard before any backend call is made.
///
/// All authentication and authorization failures collapse into
/// `Unauthorized`: a missing credential, a credential the user service
/// rejects, and a missing permission are indistinguishable to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("forbidden-input")]
    ForbiddenInput,

    #[error("unauthorized")]
    Unauthorized,
}

impl From<GuardError> for Status {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::ForbiddenInput => Status::invalid_argument("forbidden-input"),
            GuardError::Unauthorized => Status::unauthenticated("unauthorized"),
        }
    }
}
