use serde::{Deserialize, Serialize};

use crate::models::{Credentials, NewAccount};

// ============================================================================
// Account API Types
// ============================================================================

/// Body of `POST /account`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl CreateAccountRequest {
    pub fn new(user_id: String, account: NewAccount) -> Self {
        Self {
            user_id,
            email: account.email,
            password: account.password,
            name: account.name,
        }
    }
}

// ============================================================================
// Session API Types
// ============================================================================

/// Body of `POST /account/sessions/email`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CreateEmailSessionRequest {
    pub email: String,
    pub password: String,
}

impl From<Credentials> for CreateEmailSessionRequest {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error envelope the backend returns with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteErrorBody {
    pub message: String,
    pub code: u16,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_request_uses_wire_names() {
        let request = CreateAccountRequest::new(
            "abc123".to_string(),
            NewAccount {
                email: "a@b.com".to_string(),
                password: "secret123".to_string(),
                name: "A".to_string(),
            },
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userId"], "abc123");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["name"], "A");
    }

    #[test]
    fn test_remote_error_body_parses_type_field() {
        let json = r#"{"message":"Invalid credentials","code":401,"type":"user_invalid_credentials","version":"1.4.13"}"#;
        let body: RemoteErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, 401);
        assert_eq!(body.kind, "user_invalid_credentials");
        assert_eq!(body.message, "Invalid credentials");
    }
}
