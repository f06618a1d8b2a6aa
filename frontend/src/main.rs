mod components;
mod context;
mod forms;
mod pages;
mod router;
mod services;

use shared::config::Conf;
use shared::flows::restore_session;
use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::context::{AuthContext, AuthHandle, Services, StoreDispatcher};
use crate::router::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    let services = use_state(|| Services::from_conf(&Conf::from_build_env()));
    let auth = use_reducer(AuthContext::default);
    let restoring = use_state(|| true);

    {
        let services = (*services).clone();
        let dispatcher = StoreDispatcher::from(&auth);
        let restoring = restoring.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let restored = restore_session(&services.auth, &dispatcher).await;
                tracing::debug!(restored, "session check finished");
                restoring.set(false);
            });
            || ()
        });
    }

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <ContextProvider<AuthHandle> context={auth}>
                <BrowserRouter>
                    <div id="app">
                        <components::header::Header />
                        if *restoring {
                            <div class="loading">
                                <div class="spinner"></div>
                            </div>
                        } else {
                            <yew_router::Switch<Route> render={switch} />
                        }
                    </div>
                </BrowserRouter>
            </ContextProvider<AuthHandle>>
        </ContextProvider<Services>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
