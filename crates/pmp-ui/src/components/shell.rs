//! Top bar with guarded navigation and the locale switcher.

use crate::app::Route;
use crate::app::nav::use_guarded_navigator;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::use_route;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    /// Routed page content.
    pub(crate) children: Children,
    /// Active locale, highlighted in the switcher.
    pub(crate) locale: LocaleCode,
    /// Fired with the locale the user picked.
    pub(crate) on_locale_change: Callback<LocaleCode>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let navigate = use_guarded_navigator();
    let active = use_route::<Route>();

    let nav_item = |route: Route, label: String| {
        let is_active = active.as_ref() == Some(&route);
        let onclick = {
            let navigate = navigate.clone();
            let route = route.clone();
            Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
        };
        html! {
            <button
                class={classes!("nav-item", "btn", "btn-ghost", is_active.then_some("active"))}
                onclick={onclick}
            >{label}</button>
        }
    };

    html! {
        <div class={classes!("app-shell", bundle.rtl().then_some("rtl"))}>
            <header class="topbar">
                <strong class="brand">{bundle.text("pages.home_title", "Partner Management")}</strong>
                <nav>
                    {nav_item(Route::Home, bundle.text("nav.home", "Home"))}
                    {nav_item(Route::ApiKeys, bundle.text("nav.api_keys", "API Keys"))}
                </nav>
                <div class="segmented locale-toggle">
                    { for LocaleCode::all().into_iter().map(|locale| {
                        let onclick = {
                            let cb = props.on_locale_change.clone();
                            Callback::from(move |_| cb.emit(locale))
                        };
                        let name = TranslationBundle::new(locale).text("meta.name", locale.code());
                        html! {
                            <button
                                class={classes!(if props.locale == locale { "active" } else { "" })}
                                onclick={onclick}
                            >{name}</button>
                        }
                    }) }
                </div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}
