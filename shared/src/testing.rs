//! In-memory backend used by the unit tests.

use std::cell::{Cell, RefCell};

use crate::api::{CreateAccountRequest, CreateEmailSessionRequest};
use crate::error::AuthError;
use crate::gateway::AuthBackend;
use crate::models::{Account, Credentials, NewAccount, Session, User};

struct StoredAccount {
    user: User,
    password: String,
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    accounts: RefCell<Vec<StoredAccount>>,
    session: RefCell<Option<Session>>,
    sessions_issued: Cell<u32>,
    fail_account_get: Cell<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(email: &str, password: &str, name: &str) -> Self {
        let backend = Self::new();
        backend.accounts.borrow_mut().push(StoredAccount {
            user: user(&format!("user-{email}"), email, name),
            password: password.to_string(),
        });
        backend
    }

    pub fn fail_account_get(&self, fail: bool) {
        self.fail_account_get.set(fail);
    }

    pub fn has_session(&self) -> bool {
        self.session.borrow().is_some()
    }

    fn unauthorized() -> AuthError {
        AuthError::Remote {
            code: 401,
            kind: "general_unauthorized_scope".to_string(),
            message: "User (role: guests) missing scope (account)".to_string(),
        }
    }
}

impl AuthBackend for FakeBackend {
    async fn account_create(&self, request: &CreateAccountRequest) -> Result<Account, AuthError> {
        let mut accounts = self.accounts.borrow_mut();
        if accounts.iter().any(|a| a.user.email == request.email) {
            return Err(AuthError::Remote {
                code: 409,
                kind: "user_already_exists".to_string(),
                message: "A user with the same id, email, or phone already exists".to_string(),
            });
        }

        let created = user(&request.user_id, &request.email, &request.name);
        accounts.push(StoredAccount {
            user: created.clone(),
            password: request.password.clone(),
        });
        Ok(created)
    }

    async fn session_create(
        &self,
        request: &CreateEmailSessionRequest,
    ) -> Result<Session, AuthError> {
        let accounts = self.accounts.borrow();
        let account = accounts
            .iter()
            .find(|a| a.user.email == request.email && a.password == request.password)
            .ok_or_else(|| AuthError::Remote {
                code: 401,
                kind: "user_invalid_credentials".to_string(),
                message: "Invalid credentials".to_string(),
            })?;

        let issued = self.sessions_issued.get() + 1;
        self.sessions_issued.set(issued);
        let session = Session {
            id: format!("session-{issued}"),
            user_id: account.user.id.clone(),
            expire: None,
            provider: "email".to_string(),
            current: true,
        };
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    async fn account_get(&self) -> Result<User, AuthError> {
        if self.fail_account_get.get() {
            return Err(AuthError::Transport("connection reset".to_string()));
        }

        let session = self.session.borrow();
        let session = session.as_ref().ok_or_else(Self::unauthorized)?;
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.user.id == session.user_id)
            .map(|a| a.user.clone())
            .ok_or_else(Self::unauthorized)
    }

    async fn sessions_delete_all(&self) -> Result<(), AuthError> {
        match self.session.borrow_mut().take() {
            Some(_) => Ok(()),
            None => Err(Self::unauthorized()),
        }
    }
}

pub(crate) fn user(id: &str, email: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        email_verification: false,
        status: true,
        registration: None,
        labels: Vec::new(),
        prefs: serde_json::Value::Null,
    }
}

pub(crate) fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub(crate) fn new_account(email: &str, password: &str, name: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    }
}
