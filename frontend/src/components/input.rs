use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::FormControl;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub control: FormControl,
    pub name: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Fired after the form state has taken the new value.
    #[prop_or_default]
    pub on_update: Callback<()>,
}

/// Text input registered with a form under `name`.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let control = props.control.clone();
        let name = props.name.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            control.borrow_mut().set_value(&name, input.value());
            on_update.emit(());
        })
    };

    let onblur = {
        let control = props.control.clone();
        let name = props.name.clone();
        Callback::from(move |_: FocusEvent| control.borrow_mut().mark_touched(&name))
    };

    html! {
        <div class="w-full">
            if let Some(label) = &props.label {
                <label class="inline-block mb-1 pl-1">{ label }</label>
            }
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                class="input"
                {oninput}
                {onblur}
            />
            if let Some(error) = &props.error {
                <p class="field-error">{ error }</p>
            }
        </div>
    }
}
