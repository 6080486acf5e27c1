pub mod ctx;
pub mod dispatcher;

use std::fmt::Display;

use http::StatusCode;

pub use ctx::Ctx;
pub use dispatcher::{Execution, Outcome};

pub type Result<T> = std::result::Result<T, Error>;

/// A runtime failure raised by a middleware or handler while a chain is
/// executing. Matching itself never fails with this; an unmatched request
/// is [`Outcome::NotFound`].
#[derive(Debug)]
pub enum Error {
    Message(String),
    HttpStatus(StatusCode),
}

impl Error {
    pub fn new<S: AsRef<str>>(message: S) -> Self {
        Self::Message(message.as_ref().to_string())
    }

    pub fn status(status: StatusCode) -> Self {
        Self::HttpStatus(status)
    }

    pub fn get_status_code(&self) -> Option<&StatusCode> {
        match self {
            Self::HttpStatus(status) => Some(status),
            _ => None,
        }
    }
}

impl From<StatusCode> for Error {
    fn from(value: StatusCode) -> Self {
        Self::status(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => message.fmt(f),
            Self::HttpStatus(status) => {
                "chain aborted with status ".fmt(f)?;
                status.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_error_displays_verbatim() {
        let error = Error::new("backend unavailable");
        assert_eq!(error.to_string(), "backend unavailable");
        assert_eq!(error.get_status_code(), None);
    }

    #[test]
    fn test_status_error_displays_the_code() {
        let error = Error::from(StatusCode::BAD_GATEWAY);
        assert_eq!(error.to_string(), "chain aborted with status 502 Bad Gateway");
        assert_eq!(error.get_status_code(), Some(&StatusCode::BAD_GATEWAY));
    }
}
