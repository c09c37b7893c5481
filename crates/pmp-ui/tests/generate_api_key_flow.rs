use anyhow::Context;
use chrono::{TimeZone, Utc};
use pmp_api_models::{GenerateApiKeyResponse, PartnerRecord, ResponseEnvelope};
use pmp_test_support::fixtures::{
    APPROVED_PARTNERS_JSON, GENERATE_EMPTY_JSON, GENERATE_SERVICE_ERROR_JSON,
    GENERATE_SUCCESS_JSON,
};
use pmp_ui::core::error::decode_envelope;
use pmp_ui::core::guard::NavigationDecision;
use pmp_ui::core::store::AppStore;
use pmp_ui::core::validation::LabelError;
use pmp_ui::features::generate_api_key::actions::FormAction;
use pmp_ui::features::generate_api_key::logic::{interpret_generated, interpret_partners};
use pmp_ui::features::generate_api_key::state::{LoadStatus, PageAction, PageState};
use serde_json::json;

const FORM_PATH: &str = "/partnermanagement/authentication-services/api-keys/generate";
const LIST_PATH: &str = "/partnermanagement/authentication-services/api-keys";

fn loaded_page() -> PageState {
    let mut page = PageState::default();
    page.apply(PageAction::LoadStarted);
    let outcome = interpret_partners(decode_envelope::<Vec<PartnerRecord>>(
        200,
        APPROVED_PARTNERS_JSON,
    ));
    page.apply(PageAction::Loaded(outcome));
    page
}

fn edit(page: &mut PageState, action: FormAction) {
    page.apply(PageAction::Form(action));
}

fn fill(page: &mut PageState) {
    edit(page, FormAction::SelectPartner("P1".to_string()));
    edit(page, FormAction::SelectPolicy("POL1".to_string()));
    edit(page, FormAction::EditLabel("Test Key".to_string()));
}

#[test]
fn successful_generation_shows_popup() -> anyhow::Result<()> {
    let mut page = loaded_page();
    assert_eq!(page.load, LoadStatus::Ready);
    fill(&mut page);

    let submission = page.submission().context("form should be eligible")?;
    assert_eq!(submission.path(), "/partners/P1/generate/apikey");

    let now = Utc
        .with_ymd_and_hms(2024, 5, 1, 8, 30, 0)
        .single()
        .context("valid timestamp")?;
    let wire = serde_json::to_value(submission.envelope(now))?;
    assert_eq!(
        wire,
        json!({
            "id": "",
            "version": "1.0",
            "requesttime": "2024-05-01T08:30:00.000Z",
            "metadata": {},
            "request": { "policyName": "POL1", "label": "Test Key" }
        })
    );

    page.apply(PageAction::SubmitStarted);
    let outcome = interpret_generated(
        decode_envelope::<GenerateApiKeyResponse>(200, GENERATE_SUCCESS_JSON),
        &submission.partner_id,
        &submission.body.policy_name,
    );
    page.apply(PageAction::Submitted(outcome));

    let popup = page.popup().context("popup should be visible")?;
    assert_eq!(popup.api_key, "abc123");
    assert_eq!(popup.partner_id, "P1");
    assert!(page.banner.is_none());
    Ok(())
}

#[test]
fn missing_response_shows_banner_without_popup() {
    let mut page = loaded_page();
    fill(&mut page);
    page.apply(PageAction::SubmitStarted);
    page.apply(PageAction::Submitted(interpret_generated(
        decode_envelope::<GenerateApiKeyResponse>(200, GENERATE_EMPTY_JSON),
        "P1",
        "POL1",
    )));
    assert!(page.banner.is_some());
    assert!(page.popup().is_none());
}

#[test]
fn service_error_on_non_success_status_is_shown_with_code() {
    let mut page = loaded_page();
    fill(&mut page);
    page.apply(PageAction::SubmitStarted);
    page.apply(PageAction::Submitted(interpret_generated(
        decode_envelope::<GenerateApiKeyResponse>(400, GENERATE_SERVICE_ERROR_JSON),
        "P1",
        "POL1",
    )));
    let banner = page.banner.clone();
    assert_eq!(
        banner.and_then(|banner| banner.code),
        Some("PMS_PRT_107".to_string())
    );
    page.apply(PageAction::DismissError);
    assert!(page.banner.is_none());
}

#[test]
fn dirty_form_blocks_navigation_until_confirmed() {
    let mut page = loaded_page();
    let mut store = AppStore::default();
    edit(&mut page, FormAction::EditLabel("draft".to_string()));
    store.navigation.set_dirty(page.form.is_dirty());

    let decision = store
        .navigation
        .attempt(&FORM_PATH.to_string(), LIST_PATH.to_string());
    assert_eq!(decision, NavigationDecision::Blocked);
    assert!(store.navigation.warns_on_unload());

    assert_eq!(store.navigation.confirm(), Some(LIST_PATH.to_string()));
    assert!(!store.navigation.warns_on_unload());
}

#[test]
fn submit_bypass_releases_one_navigation() {
    let mut page = loaded_page();
    let mut store = AppStore::default();
    fill(&mut page);
    store.navigation.set_dirty(page.form.is_dirty());
    store.navigation.arm_submit_bypass();

    let first = store
        .navigation
        .attempt(&FORM_PATH.to_string(), LIST_PATH.to_string());
    assert_eq!(first, NavigationDecision::Proceed(LIST_PATH.to_string()));
    let second = store
        .navigation
        .attempt(&FORM_PATH.to_string(), LIST_PATH.to_string());
    assert_eq!(second, NavigationDecision::Blocked);
}

#[test]
fn invalid_labels_block_submission() {
    let mut page = loaded_page();
    fill(&mut page);

    edit(&mut page, FormAction::EditLabel("a".repeat(37)));
    assert_eq!(page.form.label_error, Some(LabelError::TooLong));
    assert!(page.submission().is_none());

    edit(&mut page, FormAction::EditLabel("key#1".to_string()));
    assert_eq!(page.form.label_error, Some(LabelError::SpecialChar));
    assert!(page.submission().is_none());

    edit(&mut page, FormAction::EditLabel("   ".to_string()));
    assert_eq!(page.form.label_error, Some(LabelError::SpecialChar));

    edit(&mut page, FormAction::EditLabel("a".repeat(36)));
    assert_eq!(page.form.label_error, None);
    assert!(page.submission().is_some());
}

#[test]
fn failed_partner_load_still_settles() {
    let mut page = PageState::default();
    page.apply(PageAction::Loaded(interpret_partners(decode_envelope::<
        Vec<PartnerRecord>,
    >(500, "gateway down"))));
    assert_eq!(page.load, LoadStatus::Ready);
    assert!(page.partners.is_empty());
    assert!(page.banner.is_some());
}

#[test]
fn partner_list_fixture_decodes() -> anyhow::Result<()> {
    let envelope: ResponseEnvelope<Vec<PartnerRecord>> =
        serde_json::from_str(APPROVED_PARTNERS_JSON)?;
    let partners = envelope.into_result()?;
    assert_eq!(partners.len(), 4);
    Ok(())
}

#[test]
fn page_waits_for_partner_list_before_showing_form() {
    let mut page = PageState::default();
    assert_eq!(page.load, LoadStatus::Loading);
    page.apply(PageAction::LoadStarted);
    assert_eq!(page.load, LoadStatus::Loading);
    assert!(page.banner.is_none());
    page.apply(PageAction::Loaded(interpret_partners(decode_envelope::<
        Vec<PartnerRecord>,
    >(200, APPROVED_PARTNERS_JSON))));
    assert_eq!(page.load, LoadStatus::Ready);
    assert_eq!(page.partner_options().len(), 3);
}
