//! Dismissible error banner.
//!
//! # Design
//! - Resolve translated banner text here so page state stays locale-free.
//! - Show the service code only when the service supplied one.

use crate::core::error::{BannerText, ErrorBanner};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBannerViewProps {
    /// Code and message to show.
    pub(crate) banner: ErrorBanner,
    /// Extra classes on the alert.
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Fired by the dismiss button.
    pub(crate) on_dismiss: Callback<()>,
}

#[function_component(ErrorBannerView)]
pub(crate) fn error_banner_view(props: &ErrorBannerViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let message = match &props.banner.message {
        BannerText::Translated { key, default } => bundle.text(key, default),
        BannerText::Raw(text) => text.clone(),
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("alert", "alert-error", "error-banner", props.class.clone())} role="alert">
            <div>
                {props.banner.code.clone().map(|code| html! { <strong class="error-code">{code}</strong> }).unwrap_or_default()}
                <span>{message}</span>
            </div>
            <button
                class="btn btn-ghost btn-sm"
                aria-label={bundle.text("generate_api_key.dismiss", "Dismiss")}
                onclick={on_close}
            >{"✕"}</button>
        </div>
    }
}
