//! Unsaved-changes confirmation for held-back navigation.

use crate::app::Route;
use crate::components::modal::Modal;
use crate::core::store::{AppStore, app_dispatch};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(BlockerPrompt)]
pub(crate) fn blocker_prompt() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigator = use_navigator();
    let pending = use_selector(|store: &AppStore| store.navigation.pending().cloned());

    let on_stay = Callback::from(|()| {
        app_dispatch().reduce_mut(|store| store.navigation.cancel());
    });
    let on_leave = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let mut target = None;
            app_dispatch().reduce_mut(|store| target = store.navigation.confirm());
            let (Some(path), Some(navigator)) = (target, navigator.as_ref()) else {
                return;
            };
            navigator.push(&Route::recognize(&path).unwrap_or(Route::NotFound));
        })
    };

    if pending.is_none() {
        return html! {};
    }

    let stay_click = {
        let on_stay = on_stay.clone();
        Callback::from(move |_: MouseEvent| on_stay.emit(()))
    };

    html! {
        <Modal
            open={true}
            title={AttrValue::from(bundle.text("blocker.title", "Unsaved changes"))}
            on_close={on_stay}
        >
            <p>{bundle.text("blocker.body", "You have unsaved changes. Leaving this page will discard them.")}</p>
            <div class="modal-action">
                <button class="btn btn-ghost" onclick={stay_click}>
                    {bundle.text("blocker.stay", "Stay on page")}
                </button>
                <button class="btn btn-error" onclick={on_leave}>
                    {bundle.text("blocker.leave", "Leave page")}
                </button>
            </div>
        </Modal>
    }
}
