//! Error types for the CodeTutor client.

use thiserror::Error;

/// A shared error type for the entire CodeTutor client.
///
/// Every failed remote call surfaces as one of these variants, so callers can
/// tell a transport failure from a rejected credential or a rejected payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodeTutorError {
    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// The platform rejected the credential (401 / 403)
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The request was rejected as invalid, either locally (`status == 0`)
    /// or by the platform (400 / 422)
    #[error("Validation error ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Any other non-success response
    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl CodeTutorError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a client-side Validation error (no request was sent)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            status: 0,
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Classifies a non-success HTTP status into a typed error.
    ///
    /// `body` is the raw response text and is carried as the message.
    /// 404 is reported as `Remote` here because the entity id is not known at
    /// this level; by-id operations map it to `NotFound` themselves.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        match status {
            401 | 403 => Self::Auth { status, message },
            400 | 422 => Self::Validation { status, message },
            _ => Self::Remote { status, message },
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Remote { status, .. } => Some(*status),
            Self::Validation { status, .. } if *status != 0 => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CodeTutorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CodeTutorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CodeTutorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CodeTutorError>`.
pub type Result<T> = std::result::Result<T, CodeTutorError>;
