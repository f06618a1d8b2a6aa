use shared::editor::{EditorBridge, EditorConfig, ExternalChange, ToolbarCommand};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement};
use yew::prelude::*;

use crate::forms::FormControl;

#[derive(Properties, PartialEq)]
pub struct RteProps {
    pub control: FormControl,
    /// Form field the editor writes to; `content` when omitted.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub default_value: AttrValue,
    #[prop_or_default]
    pub on_update: Callback<()>,
}

fn exec(command: ToolbarCommand) {
    let Ok(document) = gloo::utils::document().dyn_into::<HtmlDocument>() else {
        tracing::warn!("document is not an HTML document");
        return;
    };
    if let Err(err) = document.exec_command(command.exec_name()) {
        tracing::warn!(command = command.exec_name(), "execCommand failed: {:?}", err);
    }
}

/// Rich-text editing surface bound to a form field.
///
/// The surface owns its content; every edit is pushed into the form through
/// an [`EditorBridge`].
#[function_component(Rte)]
pub fn rte(props: &RteProps) -> Html {
    let config = use_memo(props.default_value.clone(), |value| {
        EditorConfig::default().with_initial_value(value.to_string())
    });
    let bridge = use_memo(props.name.clone(), |name| EditorBridge::new(name.as_deref()));
    let surface = use_node_ref();

    {
        let surface = surface.clone();
        let initial = config.initial_value.clone();
        use_effect_with((), move |_| {
            if let Some(element) = surface.cast::<HtmlElement>() {
                element.set_inner_html(&initial);
            }
            || ()
        });
    }

    let push_change = {
        let surface = surface.clone();
        let control = props.control.clone();
        let bridge = bridge.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_: ()| {
            if let Some(element) = surface.cast::<HtmlElement>() {
                bridge.on_external_change(&mut *control.borrow_mut(), element.inner_html());
                on_update.emit(());
            }
        })
    };

    let oninput = {
        let push_change = push_change.clone();
        Callback::from(move |_: InputEvent| push_change.emit(()))
    };

    let toolbar = config.toolbar_groups().into_iter().map(|group| {
        let buttons = group.into_iter().map(|command| {
            let push_change = push_change.clone();
            let onmousedown = Callback::from(move |e: MouseEvent| {
                // keep the selection inside the surface
                e.prevent_default();
                exec(command);
                push_change.emit(());
            });
            html! {
                <button type="button" class="rte-button" {onmousedown}>{ command.label() }</button>
            }
        });
        html! { <span class="rte-group">{ for buttons }</span> }
    });

    html! {
        <div class="w-full">
            if let Some(label) = &props.label {
                <label class="inline-block mb-1 pl-1">{ label }</label>
            }
            <div class="rte-toolbar">{ for toolbar }</div>
            <div
                ref={surface}
                class="rte-surface"
                contenteditable="true"
                style={format!("min-height: {}px", config.height)}
                {oninput}
            ></div>
        </div>
    }
}
