//! Auth gateway: a stable local interface over the backend's account API.
//!
//! [`AuthBackend`] is the seam to the remote service (the wasm client plugs
//! in an HTTP implementation, tests plug in an in-memory one).
//! [`AuthService`] layers the client's error policy on top of it.

use crate::api::{CreateAccountRequest, CreateEmailSessionRequest};
use crate::error::AuthError;
use crate::models::{unique_id, Account, Credentials, NewAccount, Session, User};

/// The four remote account operations the client consumes.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// `POST /account`
    async fn account_create(&self, request: &CreateAccountRequest) -> Result<Account, AuthError>;

    /// `POST /account/sessions/email`
    async fn session_create(
        &self,
        request: &CreateEmailSessionRequest,
    ) -> Result<Session, AuthError>;

    /// `GET /account`
    async fn account_get(&self) -> Result<User, AuthError>;

    /// `DELETE /account/sessions`
    async fn sessions_delete_all(&self) -> Result<(), AuthError>;
}

pub(crate) const GET_CURRENT_USER_ERROR: &str = "Appwrite service::getCurrentUser::Error";
pub(crate) const LOGOUT_ERROR: &str = "Appwrite service::logout::Error";

pub struct AuthService<B> {
    backend: B,
}

impl<B: AuthBackend> AuthService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates an account under a freshly generated id. Failures are logged
    /// and then returned to the caller.
    pub async fn create_account(&self, account: NewAccount) -> Result<Account, AuthError> {
        let request = CreateAccountRequest::new(unique_id(), account);
        self.backend
            .account_create(&request)
            .await
            .inspect(|created| tracing::info!(user_id = %created.id, "account created"))
            .inspect_err(|err| tracing::error!(error = %err, "account creation failed"))
    }

    /// Starts an email/password session. Errors are returned untouched.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        self.backend.session_create(&credentials.into()).await
    }

    pub async fn current_user(&self) -> Result<User, AuthError> {
        self.backend.account_get().await
    }

    /// Like [`current_user`](Self::current_user), but any failure, including
    /// having no session at all, is logged and mapped to `None`.
    pub async fn get_current_user(&self) -> Option<User> {
        match self.current_user().await {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "{}", GET_CURRENT_USER_ERROR);
                None
            }
        }
    }

    pub async fn end_sessions(&self) -> Result<(), AuthError> {
        self.backend.sessions_delete_all().await
    }

    /// Best-effort termination of every session of the current user.
    pub async fn logout(&self) {
        if let Err(err) = self.end_sessions().await {
            tracing::warn!(error = %err, "{}", LOGOUT_ERROR);
        }
    }
}
