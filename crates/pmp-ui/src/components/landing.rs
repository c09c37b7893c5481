//! Static landing pages for the console sections around the form.

use crate::app::Route;
use crate::app::nav::use_guarded_navigator;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LandingPageProps {
    /// Translation key of the heading.
    pub(crate) title_key: &'static str,
    /// Fallback heading.
    pub(crate) title_default: &'static str,
    /// Translation key of the optional paragraph.
    #[prop_or_default]
    pub(crate) body_key: Option<&'static str>,
    /// Fallback paragraph.
    #[prop_or_default]
    pub(crate) body_default: &'static str,
    /// Route opened by the call-to-action button.
    #[prop_or_default]
    pub(crate) action: Option<Route>,
    /// Translation key of the button label.
    #[prop_or_default]
    pub(crate) action_key: &'static str,
    /// Fallback button label.
    #[prop_or_default]
    pub(crate) action_default: &'static str,
}

#[function_component(LandingPage)]
pub(crate) fn landing_page(props: &LandingPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigate = use_guarded_navigator();

    let action = props.action.clone().map(|route| {
        let onclick = {
            let navigate = navigate.clone();
            Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
        };
        html! {
            <button class="btn btn-primary" onclick={onclick}>
                {bundle.text(props.action_key, props.action_default)}
            </button>
        }
    });

    html! {
        <section class="landing card">
            <h1>{bundle.text(props.title_key, props.title_default)}</h1>
            {props.body_key.map(|key| html! { <p class="muted">{bundle.text(key, props.body_default)}</p> }).unwrap_or_default()}
            {action.unwrap_or_default()}
        </section>
    }
}
