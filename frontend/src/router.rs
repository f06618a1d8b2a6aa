use shared::guard::{AuthRequirement, RedirectTarget};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{auth_layout::Protected, login::Login, signup::Signup};
use crate::pages::{add_post::AddPost, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/add-post")]
    AddPost,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<RedirectTarget> for Route {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Route::Login,
            RedirectTarget::Home => Route::Home,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! {
            <Protected authentication={AuthRequirement::RequirePublic}>
                <Login />
            </Protected>
        },
        Route::Signup => html! {
            <Protected authentication={AuthRequirement::RequirePublic}>
                <Signup />
            </Protected>
        },
        Route::AddPost => html! {
            <Protected authentication={AuthRequirement::RequireAuthenticated}>
                <AddPost />
            </Protected>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
