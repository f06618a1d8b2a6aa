use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::use_auth;
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_auth();

    html! {
        <div class="container">
            if let Some(user) = auth.0.user() {
                <h2>{ format!("Welcome back, {}", user.name) }</h2>
                <p>{ user.email.clone() }</p>
                <Link<Route> to={Route::AddPost}>
                    <button class="btn btn-primary">{ "Write a post" }</button>
                </Link<Route>>
            } else {
                <div class="empty-state">
                    <h2>{ "Login to read posts" }</h2>
                    <Link<Route> to={Route::Login}>
                        <button class="btn btn-primary">{ "Login" }</button>
                    </Link<Route>>
                </div>
            }
        </div>
    }
}
