use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::logout_btn::LogoutBtn;
use crate::context::use_auth;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let authenticated = auth.0.is_authenticated();

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Inkwell" }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    if authenticated {
                        { " | " }
                        <Link<Route> to={Route::AddPost}>{ "Add Post" }</Link<Route>>
                        { " | " }
                        <LogoutBtn />
                    } else {
                        { " | " }
                        <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                        { " | " }
                        <Link<Route> to={Route::Signup}>{ "Signup" }</Link<Route>>
                    }
                </nav>
            </div>
        </header>
    }
}
