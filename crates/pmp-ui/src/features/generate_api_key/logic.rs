//! Generate-API-key derivation and response interpretation.
//!
//! # Design
//! - Derived display values are recomputed from the partner list on demand.
//! - Response interpretation is pure so both outcomes are testable without a browser.

use crate::core::error::{ApiError, BannerText, ErrorBanner};
use crate::core::logic::{DropdownOption, dedup_options};
use pmp_api_models::{
    GenerateApiKeyResponse, PartnerRecord, PolicyRecord, ResponseEnvelope,
};

/// Generic banner text when the partner list envelope is empty.
pub const LOAD_GENERIC_ERROR: BannerText = BannerText::Translated {
    key: "generate_api_key.error_in_response",
    default: "Unexpected response from the server.",
};

/// Generic banner text when the generate envelope is empty.
pub const GENERATE_GENERIC_ERROR: BannerText = BannerText::Translated {
    key: "generate_api_key.error_in_generate_api_key",
    default: "Unable to generate the API key.",
};

/// Partner-ID options, one per distinct partner in first-seen order.
#[must_use]
pub fn partner_id_options(partners: &[PartnerRecord]) -> Vec<DropdownOption> {
    dedup_options(partners, |partner| partner.partner_id.as_str(), |_| None)
}

/// Policy options for one partner's active policies, carrying non-empty descriptions.
#[must_use]
pub fn policy_options(policies: &[PolicyRecord]) -> Vec<DropdownOption> {
    dedup_options(
        policies,
        |policy| policy.policy_name.as_str(),
        |policy| {
            (!policy.policy_description.is_empty()).then(|| policy.policy_description.clone())
        },
    )
}

/// First partner record with the given identifier.
#[must_use]
pub fn find_partner<'a>(partners: &'a [PartnerRecord], partner_id: &str) -> Option<&'a PartnerRecord> {
    partners
        .iter()
        .find(|partner| partner.partner_id == partner_id)
}

/// Translation key describing a raw partner type code.
#[must_use]
pub fn partner_type_key(code: &str) -> Option<&'static str> {
    let key = match code {
        "Auth_Partner" => "partner_types.auth_partner",
        "Device_Provider" => "partner_types.device_provider",
        "FTM_Provider" => "partner_types.ftm_provider",
        "Credential_Partner" => "partner_types.credential_partner",
        "Online_Verification_Partner" => "partner_types.online_verification_partner",
        "ABIS_Partner" => "partner_types.abis_partner",
        "SDK_Partner" => "partner_types.sdk_partner",
        "MISP_Partner" => "partner_types.misp_partner",
        "Manual_Adjudication" => "partner_types.manual_adjudication",
        _ => return None,
    };
    Some(key)
}

/// Result of loading the approved partner list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Partners arrived.
    Loaded(Vec<PartnerRecord>),
    /// Loading failed; show the banner.
    Failed(ErrorBanner),
}

/// A generated key together with what it was generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedKey {
    /// Partner the key belongs to.
    pub partner_id: String,
    /// Policy the key is bound to.
    pub policy_name: String,
    /// The credential itself.
    pub api_key: String,
}

/// Result of a generate-API-key submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A key was generated.
    Generated(GeneratedKey),
    /// Generation failed; show the banner.
    Failed(ErrorBanner),
}

/// Interpret the partner list response.
#[must_use]
pub fn interpret_partners(
    result: Result<ResponseEnvelope<Vec<PartnerRecord>>, ApiError>,
) -> LoadOutcome {
    match result {
        Ok(envelope) => match envelope.into_result() {
            Ok(partners) => LoadOutcome::Loaded(partners),
            Err(err) => {
                LoadOutcome::Failed(ErrorBanner::from_envelope_error(err, LOAD_GENERIC_ERROR))
            }
        },
        Err(err) => LoadOutcome::Failed(ErrorBanner::from_api_error(&err)),
    }
}

/// Interpret the generate-API-key response for `partner_id` / `policy_name`.
#[must_use]
pub fn interpret_generated(
    result: Result<ResponseEnvelope<GenerateApiKeyResponse>, ApiError>,
    partner_id: &str,
    policy_name: &str,
) -> SubmitOutcome {
    match result {
        Ok(envelope) => match envelope.into_result() {
            Ok(response) => SubmitOutcome::Generated(GeneratedKey {
                partner_id: partner_id.to_string(),
                policy_name: policy_name.to_string(),
                api_key: response.api_key,
            }),
            Err(err) => SubmitOutcome::Failed(ErrorBanner::from_envelope_error(
                err,
                GENERATE_GENERIC_ERROR,
            )),
        },
        Err(err) => SubmitOutcome::Failed(ErrorBanner::from_api_error(&err)),
    }
}
