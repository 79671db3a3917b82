//! Error types for the records client.
//!
//! Failures are classified by where they happen: before the request
//! (validation, encode), on the wire (network), at the service (status) or
//! while reading the list body (parse).

use thiserror::Error;

/// Errors surfaced by record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("server returned status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// The list response could not be read as records.
    #[error("invalid response: {0}")]
    Parse(String),

    /// A request body could not be built.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// Form input was rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reasons a record form is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} is required")]
    MissingField {
        /// Form field name.
        field: &'static str,
    },

    /// Age was not a whole number.
    #[error("age must be a whole number, got '{value}'")]
    InvalidAge {
        /// The rejected text.
        value: String,
    },

    /// Age parsed but is not plausible.
    #[error("age {age} is out of range (0-150)")]
    AgeOutOfRange {
        /// The rejected age.
        age: u32,
    },
}

impl ClientError {
    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Map a response status to `Ok` for 2xx and `Server` otherwise.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Server { status })
        }
    }

    /// Message shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the record service.".to_string(),
            Self::Server { status } => format!("The record service rejected the request ({status})."),
            Self::Parse(_) => "The record service sent an unreadable response.".to_string(),
            Self::Encode(_) => "The request could not be prepared.".to_string(),
            Self::Validation(e) => format!("Please check the form: {e}."),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(ClientError::check_status(200).is_ok());
        assert!(ClientError::check_status(204).is_ok());
        assert_eq!(
            ClientError::check_status(400),
            Err(ClientError::Server { status: 400 })
        );
        assert_eq!(
            ClientError::check_status(500),
            Err(ClientError::Server { status: 500 })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClientError::network("connection refused").to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            ClientError::Server { status: 404 }.to_string(),
            "server returned status 404"
        );
        let err: ClientError = ValidationError::MissingField { field: "name" }.into();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let messages = [
            ClientError::network("x").user_message(),
            ClientError::Server { status: 500 }.user_message(),
            ClientError::parse("x").user_message(),
            ClientError::Encode("x".to_string()).user_message(),
            ClientError::from(ValidationError::AgeOutOfRange { age: 200 }).user_message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(messages[1].contains("500"));
        assert!(messages[4].contains("200"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
