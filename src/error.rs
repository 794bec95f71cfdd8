//! The errors returned by the client

use reqwest::StatusCode;
use std::fmt;

/// All the possible errors returned by the client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be built or sent
    #[error("unable to send request: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The server responded with a status other than `200 OK`
    #[error(transparent)]
    Remote(#[from] RemoteError),
    /// Unable to parse the JSON response
    #[error("unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Unable to serialize the request payload
    #[error("unable to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Transport(err.into())
    }

    /// The status returned by the server, when the error comes from it.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Remote(inner) => Some(inner.status),
            _ => None,
        }
    }

    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Unexpected status returned by the server.
///
/// The body is only captured by the operations creating folders, where it holds
/// the validation message of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub status: StatusCode,
    pub body: Option<String>,
}

impl RemoteError {
    pub fn new(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    pub fn with_body(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body {
            Some(ref body) => write!(f, "status: {} body: {}", self.status, body),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::{Error, RemoteError};
    use reqwest::StatusCode;

    #[test]
    fn should_display_status_line() {
        let err = Error::from(RemoteError::new(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "404 Not Found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn should_display_status_and_body() {
        let err = RemoteError::with_body(StatusCode::CONFLICT, r#"{"message":"exists"}"#);
        assert_eq!(
            err.to_string(),
            r#"status: 409 Conflict body: {"message":"exists"}"#
        );
    }

    #[test]
    fn should_not_have_status_when_decoding_fails() {
        let err = Error::from(serde_json::from_str::<u8>("nope").unwrap_err());
        assert!(err.status().is_none());
        assert!(err.as_remote().is_none());
    }
}
