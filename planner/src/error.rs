//! Error taxonomy for the planner client.

use thiserror::Error;

/// Identifier that a page expects to find in its URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Day,
    Workout,
    Exercise,
}

impl IdKind {
    /// Text shown in place of the page content when the id is absent
    pub fn missing_message(self) -> &'static str {
        match self {
            IdKind::Day => "Day ID is missing from the URL.",
            IdKind::Workout => "Workout ID is missing from the URL.",
            IdKind::Exercise => "Exercise ID is missing from the URL.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    /// The server answered successfully but flagged the operation as failed
    #[error("{0}")]
    Rejected(String),

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A required identifier was absent or malformed in the URL
    #[error("{}", .0.missing_message())]
    MissingParameter(IdKind),

    /// The key/value storage backend refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Server-provided message, if this error carries one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected(message) if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}
