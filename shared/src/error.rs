use thiserror::Error;

use crate::api::RemoteErrorBody;
use crate::forms::FieldErrors;

/// Failures surfaced by the auth gateway and the form adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend answered with an error envelope.
    #[error("{message}")]
    Remote {
        code: u16,
        kind: String,
        message: String,
    },
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The response body could not be read.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// A form field failed one of its declared rules.
    #[error("Validation error: {0}")]
    Validation(FieldErrors),
}

impl AuthError {
    /// Text shown inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Remote { code: 401, .. })
    }
}

impl From<RemoteErrorBody> for AuthError {
    fn from(body: RemoteErrorBody) -> Self {
        Self::Remote {
            code: body.code,
            kind: body.kind,
            message: body.message,
        }
    }
}

impl From<FieldErrors> for AuthError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_shows_backend_message_verbatim() {
        let err = AuthError::from(RemoteErrorBody {
            message: "Invalid credentials".to_string(),
            code: 401,
            kind: "user_invalid_credentials".to_string(),
        });
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_field_errors_become_validation_error() {
        let mut errors = FieldErrors::default();
        errors.insert("email", "This field is required");
        let err = AuthError::from(errors);
        assert_eq!(
            err.user_message(),
            "Validation error: email: This field is required"
        );
    }

    #[test]
    fn test_transport_error_message() {
        let err = AuthError::Transport("offline".to_string());
        assert_eq!(err.user_message(), "Request failed: offline");
        assert!(!err.is_unauthorized());
    }
}
