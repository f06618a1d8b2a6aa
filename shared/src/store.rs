//! Process-wide authentication state and the actions that change it.

use std::cell::RefCell;

use crate::models::User;

/// Presumed login state plus the cached user record.
///
/// `status` is only ever set by [`AuthAction::LoginSucceeded`]; it is not
/// reconciled against the backend between explicit checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: bool,
    pub user_data: Option<User>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginSucceeded { user: User },
    LoggedOut,
    /// A session was created but the user record could not be fetched.
    UserFetchFailed,
}

impl AuthState {
    pub fn reduce(&self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginSucceeded { user } => Self {
                status: true,
                user_data: Some(user),
            },
            AuthAction::LoggedOut | AuthAction::UserFetchFailed => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.user_data.as_ref()
    }
}

/// Anything that can receive auth actions.
pub trait AuthDispatch {
    fn dispatch(&self, action: AuthAction);
}

impl AuthDispatch for RefCell<AuthState> {
    fn dispatch(&self, action: AuthAction) {
        let next = self.borrow().reduce(action);
        *self.borrow_mut() = next;
    }
}
