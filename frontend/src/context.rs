//! Application-wide contexts: the auth store and the backend services.

use std::rc::Rc;

use shared::config::Conf;
use shared::gateway::AuthService;
use shared::store::{AuthAction, AuthDispatch, AuthState};
use yew::prelude::*;

use crate::services::appwrite::AppwriteClient;

/// Yew wrapper around the shared auth state so it can back `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthContext(pub AuthState);

impl Reducible for AuthContext {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.reduce(action)))
    }
}

pub type AuthHandle = UseReducerHandle<AuthContext>;

/// Hands store updates from the shared flows to the Yew reducer.
#[derive(Clone)]
pub struct StoreDispatcher(UseReducerDispatcher<AuthContext>);

impl From<&AuthHandle> for StoreDispatcher {
    fn from(handle: &AuthHandle) -> Self {
        Self(handle.dispatcher())
    }
}

impl AuthDispatch for StoreDispatcher {
    fn dispatch(&self, action: AuthAction) {
        self.0.dispatch(action);
    }
}

#[derive(Clone)]
pub struct Services {
    pub auth: Rc<AuthService<AppwriteClient>>,
}

impl Services {
    pub fn from_conf(conf: &Conf) -> Self {
        Self {
            auth: Rc::new(AuthService::new(AppwriteClient::new(conf))),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
    }
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("AuthHandle context is provided by App")
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context is provided by App")
}
