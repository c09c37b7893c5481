//! Root component, routing switch and wasm entry point.

use crate::app::api::ApiCtx;
use crate::components::blocker_prompt::BlockerPrompt;
use crate::components::landing::LandingPage;
use crate::components::shell::AppShell;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::generate_api_key::view::GenerateApiKeyPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::utils::window;
use preferences::{console_config, load_locale, persist_locale};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

mod api;
pub(crate) mod nav;
mod preferences;
mod routes;

#[function_component(ConsoleApp)]
pub(crate) fn console_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(console_config()), ());
    let locale = use_selector(|store: &AppStore| store.profile.locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    use_effect_with_deps(
        move |locale| {
            persist_locale(*locale);
            apply_direction(TranslationBundle::new(*locale).rtl());
            || ()
        },
        *locale,
    );

    let on_locale_change = Callback::from(|next: LocaleCode| {
        app_dispatch().reduce_mut(|store| store.profile.locale = next);
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <AppShell locale={*locale} on_locale_change={on_locale_change}>
                        <Switch<Route> render={switch} />
                    </AppShell>
                    <BlockerPrompt />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Home} /> },
        Route::Home => html! {
            <LandingPage
                title_key="pages.home_title"
                title_default="Partner Management"
                body_key="pages.home_body"
                body_default="Manage partners, policies and authentication services."
                action={Some(Route::ApiKeys)}
                action_key="nav.api_keys"
                action_default="API Keys"
            />
        },
        Route::ApiKeys => html! {
            <LandingPage
                title_key="pages.api_keys_title"
                title_default="API Keys"
                body_key="pages.api_keys_body"
                body_default="API keys let authentication partners call the platform on behalf of a policy."
                action={Some(Route::GenerateApiKey)}
                action_key="pages.generate_link"
                action_default="Generate API Key"
            />
        },
        Route::GenerateApiKey => html! { <GenerateApiKeyPage /> },
        Route::NotFound => html! {
            <LandingPage
                title_key="pages.not_found"
                title_default="Page not found"
                action={Some(Route::Home)}
                action_key="nav.home"
                action_default="Home"
            />
        },
    }
}

fn apply_direction(is_rtl: bool) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            if let Err(err) = body.set_attribute("dir", if is_rtl { "rtl" } else { "ltr" }) {
                gloo::console::error!("failed to set text direction", err);
            }
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let locale = load_locale();
    gloo::console::log!(format!("console starting with locale {}", locale.code()));
    app_dispatch().reduce_mut(|store| store.profile.locale = locale);
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ConsoleApp>::with_root(root).render();
    } else {
        yew::Renderer::<ConsoleApp>::new().render();
    }
}
