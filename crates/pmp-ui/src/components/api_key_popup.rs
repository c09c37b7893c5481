//! Popup showing a freshly generated API key.

use crate::components::modal::Modal;
use crate::features::generate_api_key::logic::GeneratedKey;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

const COPIED_FEEDBACK_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub(crate) struct ApiKeyPopupProps {
    /// Key to display with the partner and policy it belongs to.
    pub(crate) generated: GeneratedKey,
    /// Fired by the close button and the backdrop.
    pub(crate) on_close: Callback<()>,
}

/// One-time display of a freshly generated key.
#[function_component(ApiKeyPopup)]
pub(crate) fn api_key_popup(props: &ApiKeyPopupProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let copied = use_state(|| false);
    let reset_timer = use_mut_ref(|| None as Option<Timeout>);

    let on_copy = {
        let copied = copied.clone();
        let reset_timer = reset_timer.clone();
        let api_key = props.generated.api_key.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = write_clipboard(&api_key) {
                console::error!("clipboard write failed", err);
                return;
            }
            copied.set(true);
            let copied = copied.clone();
            *reset_timer.borrow_mut() =
                Some(Timeout::new(COPIED_FEEDBACK_MS, move || copied.set(false)));
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let copy_label = if *copied {
        bundle.text("api_key_popup.copied", "Copied")
    } else {
        bundle.text("api_key_popup.copy", "Copy")
    };

    html! {
        <Modal
            open={true}
            title={AttrValue::from(bundle.text("api_key_popup.title", "API Key Generated"))}
            on_close={props.on_close.clone()}
        >
            <p class="muted">
                {bundle.text(
                    "api_key_popup.body",
                    "Copy this API key and store it securely. It will not be shown again.",
                )}
            </p>
            <dl class="key-summary">
                <dt>{bundle.text("generate_api_key.partner_id", "Partner ID")}</dt>
                <dd>{props.generated.partner_id.clone()}</dd>
                <dt>{bundle.text("generate_api_key.policy_name", "Policy Name")}</dt>
                <dd>{props.generated.policy_name.clone()}</dd>
            </dl>
            <label class="field-label">{bundle.text("api_key_popup.api_key", "API Key")}</label>
            <div class="join api-key-value">
                <input class="input input-bordered join-item" readonly={true} value={props.generated.api_key.clone()} />
                <button class="btn join-item" onclick={on_copy}>{copy_label}</button>
            </div>
            <div class="modal-action">
                <button class="btn btn-primary" onclick={on_close_click}>
                    {bundle.text("api_key_popup.close", "Close")}
                </button>
            </div>
        </Modal>
    }
}

fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let navigator = gloo::utils::window().navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?;
    Ok(())
}
