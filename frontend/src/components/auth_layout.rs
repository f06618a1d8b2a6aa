use shared::guard::{AuthRequirement, GuardState, RouteGuard};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub children: Children,
    #[prop_or_default]
    pub authentication: AuthRequirement,
}

/// Renders its children only when the visitor's auth status matches the
/// route's requirement, otherwise navigates away.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let navigator = use_navigator();
    let auth = use_auth();
    let guard = use_state(|| RouteGuard::new(props.authentication));

    {
        let guard = guard.clone();
        let status = auth.0.status;

        use_effect_with((status, props.authentication), move |&(status, requirement)| {
            let mut next = (*guard).clone();
            next.set_requirement(requirement);

            if let GuardState::Redirect(target) = next.evaluate(status) {
                match navigator {
                    Some(navigator) => navigator.push(&Route::from(target)),
                    None => tracing::error!(path = target.path(), "no router to redirect with"),
                }
            }
            guard.set(next);
            || ()
        });
    }

    match guard.state() {
        GuardState::Loading => html! { <h1>{ "Loading..." }</h1> },
        GuardState::Permit => html! { <>{ props.children.clone() }</> },
        GuardState::Redirect(_) => html! {},
    }
}
