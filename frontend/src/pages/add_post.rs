use shared::editor::{sanitize_html, EditorBridge};
use shared::forms::{FieldErrors, PostForm};
use shared::models::PostDraft;
use yew::prelude::*;

use crate::components::{input::Input, rte::Rte};
use crate::forms::FormControl;

#[function_component(AddPost)]
pub fn add_post() -> Html {
    let bridge = use_memo((), |_| EditorBridge::new(None));
    let control = {
        let bridge = bridge.clone();
        use_state(move || FormControl::new(PostForm::build(&bridge, "")))
    };
    let field_errors = use_state(FieldErrors::default);
    let draft = use_state(|| None::<PostDraft>);

    let on_update = {
        let control = (*control).clone();
        let field_errors = field_errors.clone();
        Callback::from(move |_: ()| field_errors.set(control.borrow().errors().clone()))
    };

    let onsubmit = {
        let control = (*control).clone();
        let bridge = bridge.clone();
        let field_errors = field_errors.clone();
        let draft = draft.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submitted = PostForm::submit(&mut control.borrow_mut(), &bridge);
            match submitted {
                Ok(post) => {
                    tracing::info!(title = %post.title, length = post.content.len(), "post draft ready");
                    field_errors.set(FieldErrors::default());
                    draft.set(Some(post));
                }
                Err(errors) => field_errors.set(errors),
            }
        })
    };

    let field_error = |name: &str| field_errors.get(name).map(|m| AttrValue::from(m.to_string()));

    html! {
        <div class="container">
            <form {onsubmit} class="flex flex-wrap">
                <Input
                    control={(*control).clone()}
                    name={PostForm::TITLE}
                    label="Title: "
                    placeholder="Title"
                    error={field_error(PostForm::TITLE)}
                    on_update={on_update.clone()}
                />
                <Rte
                    control={(*control).clone()}
                    label="Content: "
                    {on_update}
                />
                if let Some(error) = field_error(bridge.field()) {
                    <p class="field-error">{ error }</p>
                }
                <button type="submit" class="btn btn-primary w-full">{ "Submit" }</button>
            </form>
            if let Some(post) = &*draft {
                <div class="post-preview">
                    <h2>{ &post.title }</h2>
                    { Html::from_html_unchecked(AttrValue::from(sanitize_html(&post.content))) }
                </div>
            }
        </div>
    }
}
