//! Canned partner-manager payloads and a decoding helper.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Approved partners as returned by `getAllApprovedAuthPartnerPolicies`.
///
/// `P1` appears twice (the second entry must lose to the first), `P1` lists
/// `POL1` twice with different descriptions, and `P3` has no policies.
pub const APPROVED_PARTNERS_JSON: &str = r#"{
    "id": "mosip.partnermanager.approved.partner.policies",
    "version": "1.0",
    "responsetime": "2024-03-05T09:07:01.000Z",
    "response": [
        {
            "partnerId": "P1",
            "partnerType": "Auth_Partner",
            "policyGroupName": "Default Group",
            "activePolicies": [
                { "policyName": "POL1", "policyDescription": "Full KYC" },
                { "policyName": "POL2", "policyDescription": "Demo auth" },
                { "policyName": "POL1", "policyDescription": "Duplicate entry" }
            ]
        },
        {
            "partnerId": "P2",
            "partnerType": "Auth_Partner",
            "policyGroupName": "Banking",
            "activePolicies": [
                { "policyName": "POL3", "policyDescription": "OTP only" }
            ]
        },
        {
            "partnerId": "P1",
            "partnerType": "Auth_Partner",
            "policyGroupName": "Shadow Group",
            "activePolicies": [
                { "policyName": "SHADOW", "policyDescription": "Never shown" }
            ]
        },
        {
            "partnerId": "P3",
            "partnerType": "Regional_Partner",
            "policyGroupName": "Regional",
            "extraField": true
        }
    ],
    "errors": null
}"#;

/// Successful generate-API-key response.
pub const GENERATE_SUCCESS_JSON: &str = r#"{
    "id": "mosip.partnermanager.generate.apikey",
    "version": "1.0",
    "responsetime": "2024-03-05T09:08:00.000Z",
    "response": { "apiKey": "abc123", "partnerId": "P1" },
    "errors": []
}"#;

/// Generate-API-key response carrying a service error and no payload.
pub const GENERATE_SERVICE_ERROR_JSON: &str = r#"{
    "id": "mosip.partnermanager.generate.apikey",
    "version": "1.0",
    "responsetime": "2024-03-05T09:08:00.000Z",
    "response": null,
    "errors": [
        { "errorCode": "PMS_PRT_107", "message": "Label already exists" },
        { "errorCode": "PMS_PRT_999", "message": "Second error is ignored" }
    ]
}"#;

/// Generate-API-key response with neither payload nor errors.
pub const GENERATE_EMPTY_JSON: &str = r#"{
    "id": "mosip.partnermanager.generate.apikey",
    "version": "1.0",
    "responsetime": "2024-03-05T09:08:00.000Z"
}"#;

/// Decode a fixture into `T`.
///
/// # Errors
/// Returns an error when the fixture does not match `T`.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).context("fixture did not decode into the requested type")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn every_fixture_is_valid_json() {
        for raw in [
            APPROVED_PARTNERS_JSON,
            GENERATE_SUCCESS_JSON,
            GENERATE_SERVICE_ERROR_JSON,
            GENERATE_EMPTY_JSON,
        ] {
            assert!(decode::<Value>(raw).is_ok());
        }
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let err = decode::<Vec<String>>(GENERATE_EMPTY_JSON).expect_err("object is not a list");
        assert!(err.to_string().contains("fixture did not decode"));
    }
}
