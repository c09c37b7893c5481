//! Partner-manager calls for the generate-API-key page.

use crate::features::generate_api_key::logic::{
    LoadOutcome, SubmitOutcome, interpret_generated, interpret_partners,
};
use crate::features::generate_api_key::state::Submission;
use crate::services::api::ApiClient;
use gloo::console;
use pmp_api_models::APPROVED_AUTH_PARTNER_POLICIES_PATH;

pub(crate) async fn load_partners(client: &ApiClient) -> LoadOutcome {
    let result = client
        .get_envelope(APPROVED_AUTH_PARTNER_POLICIES_PATH)
        .await;
    if let Err(err) = &result {
        console::error!(format!("loading approved partners failed: {err}"));
    }
    interpret_partners(result)
}

pub(crate) async fn generate_api_key(client: &ApiClient, submission: &Submission) -> SubmitOutcome {
    let envelope = submission.envelope(chrono::Utc::now());
    let result = client
        .patch_envelope(&submission.path(), &envelope)
        .await;
    if let Err(err) = &result {
        console::error!(format!("generating api key failed: {err}"));
    }
    interpret_generated(
        result,
        &submission.partner_id,
        &submission.body.policy_name,
    )
}
