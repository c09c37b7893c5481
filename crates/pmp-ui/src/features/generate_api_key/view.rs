//! Generate-API-key page.
//!
//! # Design
//! - The page reducer owns form and response state; the shared store only
//!   learns whether the form is dirty and whether a submit bypass is armed.
//! - The unload and back/forward listeners exist only while the form is dirty.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::nav::use_guarded_navigator;
use crate::components::api_key_popup::ApiKeyPopup;
use crate::components::dropdown::DropdownField;
use crate::components::error_banner::ErrorBannerView;
use crate::components::loading::Loading;
use crate::core::guard::NavigationDecision;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::generate_api_key::actions::FormAction;
use crate::features::generate_api_key::api::{generate_api_key, load_partners};
use crate::features::generate_api_key::logic::partner_type_key;
use crate::features::generate_api_key::state::{LoadStatus, PageAction, PageState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BeforeUnloadEvent, Event, HtmlInputElement};
use yew::prelude::*;
use yew_router::Routable;
use yewdux::prelude::use_selector;

#[function_component(GenerateApiKeyPage)]
pub(crate) fn generate_api_key_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api_ctx = use_context::<ApiCtx>();
    let state = use_reducer(PageState::default);
    let navigate = use_guarded_navigator();
    let warns_on_unload = use_selector(|store: &AppStore| store.navigation.warns_on_unload());

    {
        let state = state.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    state.dispatch(PageAction::LoadStarted);
                    let client = api_ctx.client.clone();
                    yew::platform::spawn_local(async move {
                        let outcome = load_partners(&client).await;
                        state.dispatch(PageAction::Loaded(outcome));
                    });
                }
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        move |dirty| {
            let dirty = *dirty;
            app_dispatch().reduce_mut(|store| store.navigation.set_dirty(dirty));
            || ()
        },
        state.form.is_dirty(),
    );
    use_effect_with_deps(
        |_| {
            || {
                app_dispatch().reduce_mut(|store| store.navigation.release());
            }
        },
        (),
    );
    use_effect_with_deps(
        |warn| {
            let listeners = warn.then(|| {
                [
                    EventListener::new_with_options(
                        &window(),
                        "beforeunload",
                        EventListenerOptions::enable_prevent_default(),
                        confirm_unload,
                    ),
                    EventListener::new_with_options(
                        &window(),
                        "popstate",
                        EventListenerOptions::run_in_capture_phase(),
                        hold_back_navigation,
                    ),
                ]
            });
            move || drop(listeners)
        },
        *warns_on_unload,
    );

    let Some(api_ctx) = api_ctx else {
        return html! { <div class="error-banner">{"Missing API context"}</div> };
    };
    if state.load == LoadStatus::Loading {
        return html! {
            <Loading label={AttrValue::from(bundle.text("generate_api_key.loading", "Loading..."))} />
        };
    }

    let dispatch_form = |build: fn(String) -> FormAction| {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(PageAction::Form(build(value))))
    };
    let on_partner = dispatch_form(FormAction::SelectPartner);
    let on_policy = dispatch_form(FormAction::SelectPolicy);
    let on_label = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.dispatch(PageAction::Form(FormAction::EditLabel(input.value())));
            }
        })
    };
    let on_clear = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PageAction::Form(FormAction::Clear)))
    };
    let go_to = |route: Route| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))
    };
    let on_submit = {
        let state = state.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(submission) = state.submission() else {
                return;
            };
            app_dispatch().reduce_mut(|store| store.navigation.arm_submit_bypass());
            state.dispatch(PageAction::SubmitStarted);
            let state = state.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                let outcome = generate_api_key(&client, &submission).await;
                state.dispatch(PageAction::Submitted(outcome));
            });
        })
    };
    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(PageAction::DismissError))
    };
    let on_close_popup = {
        let state = state.clone();
        let navigate = navigate.clone();
        Callback::from(move |()| {
            state.dispatch(PageAction::ClosePopup);
            navigate.emit(Route::ApiKeys);
        })
    };

    let partner_type = state
        .selected_partner()
        .map(|partner| partner.partner_type.as_str())
        .filter(|code| !code.is_empty())
        .map_or_else(
            || bundle.text("partner_types.auth_partner", "Auth Partner"),
            |code| {
                partner_type_key(code)
                    .map_or_else(|| code.to_string(), |key| bundle.text(key, code))
            },
        );
    let policy_group = state
        .selected_partner()
        .map(|partner| partner.policy_group_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| bundle.text("generate_api_key.policy_group", "Policy Group"));
    let no_partner = state.form.partner_id.is_empty();
    let rtl = bundle.rtl();

    html! {
        <section class={classes!("generate-api-key", rtl.then_some("rtl"))}>
            {state.banner.clone().map(|banner| html! {
                <ErrorBannerView banner={banner} on_dismiss={on_dismiss.clone()} />
            }).unwrap_or_default()}
            <header class="page-header">
                <button
                    class="btn btn-ghost btn-circle"
                    aria-label={bundle.text("nav.back", "Back")}
                    onclick={go_to(Route::ApiKeys)}
                >{if rtl { "→" } else { "←" }}</button>
                <div>
                    <h1>{bundle.text("generate_api_key.title", "Generate API Key")}</h1>
                    <nav class="breadcrumbs">
                        <button class="link" onclick={go_to(Route::Home)}>
                            {bundle.text("nav.home", "Home")}
                        </button>
                        <span class="separator">{"/"}</span>
                        <button class="link" onclick={go_to(Route::ApiKeys)}>
                            {bundle.text("nav.authentication_services", "Authentication Services")}
                        </button>
                    </nav>
                </div>
            </header>
            <div class="card form-card">
                <p class="muted">
                    {bundle.text("generate_api_key.mandatory_prefix", "All fields marked with")}
                    <span class="required">{" * "}</span>
                    {bundle.text("generate_api_key.mandatory_suffix", "are mandatory.")}
                </p>
                <div class="form-grid">
                    <DropdownField
                        id="partner_id"
                        label={bundle.text("generate_api_key.partner_id", "Partner ID")}
                        placeholder={bundle.text("generate_api_key.select_partner_id", "Select Partner ID")}
                        options={state.partner_options()}
                        selected={state.form.partner_id.clone()}
                        required={true}
                        tooltip={AttrValue::from(bundle.text(
                            "generate_api_key.partner_id_tooltip",
                            "Only approved authentication partners are listed.",
                        ))}
                        empty_label={bundle.text("generate_api_key.no_options", "No matching options")}
                        on_select={on_partner}
                    />
                    <div class="readonly-field">
                        <span class="field-label">{bundle.text("generate_api_key.partner_type", "Partner Type")}</span>
                        <div class={classes!("readonly-value", no_partner.then_some("placeholder"))}>{partner_type}</div>
                    </div>
                    <div class="readonly-field">
                        <span class="field-label">{bundle.text("generate_api_key.policy_group", "Policy Group")}</span>
                        <div class={classes!("readonly-value", no_partner.then_some("placeholder"))}>{policy_group}</div>
                    </div>
                    <DropdownField
                        id="policy_name"
                        label={bundle.text("generate_api_key.policy_name", "Policy Name")}
                        placeholder={bundle.text("generate_api_key.select_policy_name", "Select Policy Name")}
                        options={state.policy_options()}
                        selected={state.form.policy_name.clone()}
                        disabled={no_partner}
                        required={true}
                        tooltip={AttrValue::from(bundle.text(
                            "generate_api_key.policy_name_tooltip",
                            "Policies active for the selected partner.",
                        ))}
                        search_placeholder={AttrValue::from(bundle.text("generate_api_key.search", "Search"))}
                        empty_label={bundle.text("generate_api_key.no_options", "No matching options")}
                        on_select={on_policy}
                    />
                    <div class="text-field">
                        <label class="field-label" for="name_label">
                            {bundle.text("generate_api_key.name", "Name")}
                            <span class="required">{"*"}</span>
                        </label>
                        <input
                            id="name_label"
                            class={classes!("input", "input-bordered", state.form.label_error.is_some().then_some("input-error"))}
                            type="text"
                            placeholder={bundle.text("generate_api_key.name_placeholder", "Enter a name for the API key")}
                            value={state.form.name_label.clone()}
                            oninput={on_label}
                        />
                        {state.form.label_error.map(|err| html! {
                            <p class="field-error" role="alert">
                                {bundle.text(err.message_key(), err.default_message())}
                            </p>
                        }).unwrap_or_default()}
                    </div>
                </div>
                <div class="form-actions">
                    <button class="btn btn-ghost" onclick={on_clear}>
                        {bundle.text("generate_api_key.clear_form", "Clear Form")}
                    </button>
                    <div class="spacer" />
                    <button class="btn btn-outline" onclick={go_to(Route::ApiKeys)}>
                        {bundle.text("generate_api_key.cancel", "Cancel")}
                    </button>
                    <button class="btn btn-primary" disabled={!state.can_submit()} onclick={on_submit}>
                        {if state.submitting {
                            bundle.text("generate_api_key.submitting", "Submitting...")
                        } else {
                            bundle.text("generate_api_key.submit", "Submit")
                        }}
                    </button>
                </div>
            </div>
            {state.popup().cloned().map(|generated| html! {
                <ApiKeyPopup generated={generated} on_close={on_close_popup.clone()} />
            }).unwrap_or_default()}
        </section>
    }
}

fn confirm_unload(event: &Event) {
    event.prevent_default();
    if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
        event.set_return_value("");
    }
}

/// Browser back/forward out of a dirty form.
///
/// Runs in the capture phase so it sees `popstate` before the router. A held
/// pop stops the router's listener, restores the form URL and leaves the
/// popped path pending for the prompt.
fn hold_back_navigation(event: &Event) {
    let form_path = Route::GenerateApiKey.to_path();
    let Ok(popped) = window().location().pathname() else {
        return;
    };
    let mut decision = NavigationDecision::Blocked;
    app_dispatch().reduce_mut(|store| decision = store.navigation.attempt(&form_path, popped));
    if let NavigationDecision::Proceed(_) = decision {
        return;
    }
    event.stop_immediate_propagation();
    let restored = window()
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&form_path)));
    if let Err(err) = restored {
        console::error!("failed to restore the form location", err);
    }
}
