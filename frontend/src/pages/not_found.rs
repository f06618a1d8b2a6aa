use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let auth = use_auth();
    let (target, label) = if auth.0.is_authenticated() {
        (Route::AddPost, "Write a post instead")
    } else {
        (Route::Login, "Sign in")
    };

    html! {
        <div class="container">
            <div class="empty-state">
                <h2>{ "This page doesn't exist" }</h2>
                <p>{ "The link may be broken, or the post was never published." }</p>
                <Link<Route> to={Route::Home}>{ "Back to Home" }</Link<Route>>
                { " | " }
                <Link<Route> to={target}>{ label }</Link<Route>>
            </div>
        </div>
    }
}
