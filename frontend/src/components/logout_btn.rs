use shared::flows::sign_out;
use yew::prelude::*;

use crate::context::{use_auth, use_services, StoreDispatcher};

#[function_component(LogoutBtn)]
pub fn logout_btn() -> Html {
    let services = use_services();
    let auth = use_auth();

    let onclick = Callback::from(move |_: MouseEvent| {
        let services = services.clone();
        let dispatcher = StoreDispatcher::from(&auth);
        wasm_bindgen_futures::spawn_local(async move {
            sign_out(&services.auth, &dispatcher).await;
        });
    });

    html! {
        <button class="btn btn-secondary" {onclick}>{ "Logout" }</button>
    }
}
