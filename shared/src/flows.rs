//! Login, signup, logout and startup flows that tie the gateway to the store.

use crate::error::AuthError;
use crate::gateway::{AuthBackend, AuthService};
use crate::models::{Credentials, NewAccount, User};
use crate::store::{AuthAction, AuthDispatch};

#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    Authenticated(User),
    /// The session exists but the user record could not be fetched, so the
    /// store stays unauthenticated.
    SessionWithoutUser,
}

/// Starts a session and, on success, fetches the user into the store.
///
/// A rejected login is returned without touching the store.
pub async fn sign_in<B, D>(
    service: &AuthService<B>,
    store: &D,
    credentials: Credentials,
) -> Result<SignInOutcome, AuthError>
where
    B: AuthBackend,
    D: AuthDispatch + ?Sized,
{
    let session = service.login(credentials).await?;
    tracing::debug!(session_id = %session.id, "session created");

    match service.get_current_user().await {
        Some(user) => {
            tracing::info!(user_id = %user.id, "signed in");
            store.dispatch(AuthAction::LoginSucceeded { user: user.clone() });
            Ok(SignInOutcome::Authenticated(user))
        }
        None => {
            store.dispatch(AuthAction::UserFetchFailed);
            Ok(SignInOutcome::SessionWithoutUser)
        }
    }
}

/// Creates the account and signs in with the same credentials.
pub async fn sign_up<B, D>(
    service: &AuthService<B>,
    store: &D,
    account: NewAccount,
) -> Result<SignInOutcome, AuthError>
where
    B: AuthBackend,
    D: AuthDispatch + ?Sized,
{
    let credentials = account.credentials();
    service.create_account(account).await?;
    sign_in(service, store, credentials).await
}

/// Ends the sessions (best effort) and clears local state regardless.
pub async fn sign_out<B, D>(service: &AuthService<B>, store: &D)
where
    B: AuthBackend,
    D: AuthDispatch + ?Sized,
{
    service.logout().await;
    store.dispatch(AuthAction::LoggedOut);
    tracing::info!("signed out");
}

/// Picks up a session left over from a previous page load.
pub async fn restore_session<B, D>(service: &AuthService<B>, store: &D) -> bool
where
    B: AuthBackend,
    D: AuthDispatch + ?Sized,
{
    match service.get_current_user().await {
        Some(user) => {
            store.dispatch(AuthAction::LoginSucceeded { user });
            true
        }
        None => {
            store.dispatch(AuthAction::LoggedOut);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::guard::{AuthRequirement, GuardState, RouteGuard};
    use crate::store::AuthState;
    use crate::testing::{credentials, new_account, FakeBackend};

    #[tokio::test]
    async fn test_sign_in_authenticates_and_guard_permits() {
        let service = AuthService::new(FakeBackend::with_account("a@b.com", "pw", "Ada"));
        let store = RefCell::new(AuthState::default());

        let outcome = sign_in(&service, &store, credentials("a@b.com", "pw"))
            .await
            .expect("should sign in");

        match outcome {
            SignInOutcome::Authenticated(user) => assert_eq!(user.email, "a@b.com"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(store.borrow().is_authenticated());

        let mut guard = RouteGuard::new(AuthRequirement::RequireAuthenticated);
        assert_eq!(guard.evaluate(store.borrow().status), GuardState::Permit);
    }

    #[tokio::test]
    async fn test_rejected_sign_in_keeps_store_unauthenticated() {
        let service = AuthService::new(FakeBackend::with_account("a@b.com", "pw", "Ada"));
        let store = RefCell::new(AuthState::default());

        let err = sign_in(&service, &store, credentials("a@b.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(*store.borrow(), AuthState::default());
    }

    #[tokio::test]
    async fn test_user_fetch_failure_after_login_leaves_session_dangling() {
        let backend = FakeBackend::with_account("a@b.com", "pw", "Ada");
        backend.fail_account_get(true);
        let service = AuthService::new(backend);
        let store = RefCell::new(AuthState::default());

        let outcome = sign_in(&service, &store, credentials("a@b.com", "pw"))
            .await
            .unwrap();

        assert_eq!(outcome, SignInOutcome::SessionWithoutUser);
        assert!(!store.borrow().is_authenticated());
        assert!(service.backend().has_session());
    }

    #[tokio::test]
    async fn test_sign_up_creates_account_and_signs_in() {
        let service = AuthService::new(FakeBackend::new());
        let store = RefCell::new(AuthState::default());

        sign_up(&service, &store, new_account("new@b.com", "password1", "New"))
            .await
            .expect("should sign up");

        let state = store.borrow();
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("New"));
    }

    #[tokio::test]
    async fn test_sign_up_conflict_does_not_sign_in() {
        let service = AuthService::new(FakeBackend::with_account("a@b.com", "pw", "Ada"));
        let store = RefCell::new(AuthState::default());

        let err = sign_up(&service, &store, new_account("a@b.com", "pw", "Ada"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Remote { code: 409, .. }));
        assert!(!store.borrow().is_authenticated());
        assert!(!service.backend().has_session());
    }

    #[tokio::test]
    async fn test_sign_out_without_session_keeps_unauthenticated() {
        let service = AuthService::new(FakeBackend::new());
        let store = RefCell::new(AuthState::default());

        sign_out(&service, &store).await;

        assert!(!store.borrow().is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_out_clears_store() {
        let service = AuthService::new(FakeBackend::with_account("a@b.com", "pw", "Ada"));
        let store = RefCell::new(AuthState::default());
        sign_in(&service, &store, credentials("a@b.com", "pw"))
            .await
            .unwrap();

        sign_out(&service, &store).await;

        assert_eq!(*store.borrow(), AuthState::default());
        assert!(!service.backend().has_session());
    }

    #[tokio::test]
    async fn test_restore_session_picks_up_existing_session() {
        let service = AuthService::new(FakeBackend::with_account("a@b.com", "pw", "Ada"));
        service.login(credentials("a@b.com", "pw")).await.unwrap();
        let store = RefCell::new(AuthState::default());

        assert!(restore_session(&service, &store).await);
        assert!(store.borrow().is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_session_without_session() {
        let service = AuthService::new(FakeBackend::new());
        let store = RefCell::new(AuthState::default());

        assert!(!restore_session(&service, &store).await);
        assert!(!store.borrow().is_authenticated());
    }
}
