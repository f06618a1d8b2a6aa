use shared::flows::sign_up;
use shared::forms::{FieldErrors, SignupForm};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::input::Input;
use crate::context::{use_auth, use_services, StoreDispatcher};
use crate::forms::FormControl;
use crate::router::Route;

#[function_component(Signup)]
pub fn signup() -> Html {
    let services = use_services();
    let auth = use_auth();
    let navigator = use_navigator();
    let control = use_state(|| FormControl::new(SignupForm::build()));
    let field_errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);

    let on_update = {
        let control = (*control).clone();
        let field_errors = field_errors.clone();
        Callback::from(move |_: ()| field_errors.set(control.borrow().errors().clone()))
    };

    let onsubmit = {
        let control = (*control).clone();
        let field_errors = field_errors.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let submitted = SignupForm::submit(&mut control.borrow_mut());
            let account = match submitted {
                Ok(account) => account,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::default());

            let services = services.clone();
            let dispatcher = StoreDispatcher::from(&auth);
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match sign_up(&services.auth, &dispatcher, account).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let field_error = |name: &str| field_errors.get(name).map(|m| AttrValue::from(m.to_string()));

    html! {
        <div class="flex items-center justify-center w-full">
            <div class="mx-auto w-full max-w-lg bg-gray-100 rounded-xl p-10 border border-black/10">
                <h2 class="text-center text-2xl font-bold leading-tight">{ "Sign up to create account" }</h2>
                <p class="mt-2 text-center text-base text-black/60">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Sign In" }</Link<Route>>
                </p>
                if let Some(message) = &*error {
                    <p class="text-red-600 mt-8 text-center">{ message }</p>
                }
                <form {onsubmit} class="mt-8">
                    <div class="space-y-5">
                        <Input
                            control={(*control).clone()}
                            name={SignupForm::NAME}
                            label="Full Name: "
                            placeholder="Enter your full name"
                            error={field_error(SignupForm::NAME)}
                            on_update={on_update.clone()}
                        />
                        <Input
                            control={(*control).clone()}
                            name={SignupForm::EMAIL}
                            label="Email: "
                            placeholder="Enter your email"
                            input_type="email"
                            error={field_error(SignupForm::EMAIL)}
                            on_update={on_update.clone()}
                        />
                        <Input
                            control={(*control).clone()}
                            name={SignupForm::PASSWORD}
                            label="Password: "
                            placeholder="Enter your password"
                            input_type="password"
                            error={field_error(SignupForm::PASSWORD)}
                            {on_update}
                        />
                        <button type="submit" class="btn btn-primary w-full">{ "Create Account" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
