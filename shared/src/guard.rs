//! Route guard state machine.
//!
//! A guard starts in [`GuardState::Loading`] and leaves it on its first
//! evaluation for good; later flag changes move it between `Permit` and
//! `Redirect` only.

/// What a guarded route expects of the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthRequirement {
    /// Pages that need a login (profile, editor).
    #[default]
    RequireAuthenticated,
    /// Pages a logged-in visitor should not see (login, signup).
    RequirePublic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Home,
}

impl RedirectTarget {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Permit,
    Redirect(RedirectTarget),
}

impl AuthRequirement {
    /// Decision for a single observation of the auth flag.
    pub fn decide(self, authenticated: bool) -> GuardState {
        match (self, authenticated) {
            (Self::RequireAuthenticated, false) => GuardState::Redirect(RedirectTarget::Login),
            (Self::RequirePublic, true) => GuardState::Redirect(RedirectTarget::Home),
            _ => GuardState::Permit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    requirement: AuthRequirement,
    state: GuardState,
}

impl RouteGuard {
    pub fn new(requirement: AuthRequirement) -> Self {
        Self {
            requirement,
            state: GuardState::Loading,
        }
    }

    pub fn requirement(&self) -> AuthRequirement {
        self.requirement
    }

    /// Swaps the requirement without going back to `Loading`.
    pub fn set_requirement(&mut self, requirement: AuthRequirement) {
        self.requirement = requirement;
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn has_loaded(&self) -> bool {
        self.state != GuardState::Loading
    }

    /// Runs on mount and on every change of the auth flag.
    pub fn evaluate(&mut self, authenticated: bool) -> GuardState {
        let next = self.requirement.decide(authenticated);
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "route guard transition");
        }
        self.state = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let guard = RouteGuard::new(AuthRequirement::default());
        assert_eq!(guard.state(), GuardState::Loading);
        assert!(!guard.has_loaded());
        assert_eq!(guard.requirement(), AuthRequirement::RequireAuthenticated);
    }

    #[test]
    fn test_required_and_unauthenticated_redirects_to_login() {
        let mut guard = RouteGuard::new(AuthRequirement::RequireAuthenticated);
        let state = guard.evaluate(false);
        assert_eq!(state, GuardState::Redirect(RedirectTarget::Login));
        assert_eq!(RedirectTarget::Login.path(), "/login");
    }

    #[test]
    fn test_public_and_authenticated_redirects_home() {
        let mut guard = RouteGuard::new(AuthRequirement::RequirePublic);
        let state = guard.evaluate(true);
        assert_eq!(state, GuardState::Redirect(RedirectTarget::Home));
        assert_eq!(RedirectTarget::Home.path(), "/");
    }

    #[test]
    fn test_matching_status_permits() {
        assert_eq!(
            AuthRequirement::RequireAuthenticated.decide(true),
            GuardState::Permit
        );
        assert_eq!(AuthRequirement::RequirePublic.decide(false), GuardState::Permit);
    }

    #[test]
    fn test_permits_only_when_requirement_matches() {
        let requirements = [
            AuthRequirement::RequireAuthenticated,
            AuthRequirement::RequirePublic,
        ];
        for requirement in requirements {
            for authenticated in [false, true] {
                let mut guard = RouteGuard::new(requirement);
                let permitted = guard.evaluate(authenticated) == GuardState::Permit;
                let expected = match requirement {
                    AuthRequirement::RequireAuthenticated => authenticated,
                    AuthRequirement::RequirePublic => !authenticated,
                };
                assert_eq!(permitted, expected, "{:?} with {}", requirement, authenticated);
            }
        }
    }

    #[test]
    fn test_never_reenters_loading() {
        let mut guard = RouteGuard::new(AuthRequirement::RequireAuthenticated);
        assert_eq!(guard.evaluate(true), GuardState::Permit);
        assert_eq!(
            guard.evaluate(false),
            GuardState::Redirect(RedirectTarget::Login)
        );
        assert!(guard.has_loaded());
        assert_eq!(guard.evaluate(true), GuardState::Permit);
    }

    #[test]
    fn test_set_requirement_keeps_loaded_state() {
        let mut guard = RouteGuard::new(AuthRequirement::RequireAuthenticated);
        guard.evaluate(true);
        guard.set_requirement(AuthRequirement::RequirePublic);
        assert!(guard.has_loaded());
        assert_eq!(
            guard.evaluate(true),
            GuardState::Redirect(RedirectTarget::Home)
        );
    }
}
