#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the partner-manager service.
//!
//! Every call to the service is wrapped: requests travel inside a
//! [`RequestEnvelope`] and answers come back inside a [`ResponseEnvelope`]
//! that carries either a `response` payload or a list of [`ServiceError`]s.
//! [`ResponseEnvelope::into_result`] is the single place that decides which
//! of the two a caller gets.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Version string stamped on every outgoing request envelope.
pub const REQUEST_VERSION: &str = "1.0";

/// Path listing every approved authentication partner with its active policies.
pub const APPROVED_AUTH_PARTNER_POLICIES_PATH: &str = "/partners/getAllApprovedAuthPartnerPolicies";

/// Path that generates an API key for `partner_id`.
///
/// The partner identifier is inserted as-is; callers are expected to
/// percent-encode it first.
#[must_use]
pub fn generate_api_key_path(partner_id: &str) -> String {
    format!("/partners/{partner_id}/generate/apikey")
}

/// A policy currently active for a partner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    /// Unique policy name within the partner's policy group.
    pub policy_name: String,
    /// Free-form description shown next to the name in pickers.
    #[serde(default)]
    pub policy_description: String,
}

/// An approved authentication partner and the policies it may use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRecord {
    /// Partner identifier.
    pub partner_id: String,
    /// Raw partner type code (for example `Auth_Partner`).
    #[serde(default)]
    pub partner_type: String,
    /// Name of the policy group the partner belongs to.
    #[serde(default)]
    pub policy_group_name: String,
    /// Policies currently active for the partner.
    #[serde(default)]
    pub active_policies: Vec<PolicyRecord>,
}

/// Body of the generate-API-key request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateApiKeyRequest {
    /// Policy the key is bound to.
    pub policy_name: String,
    /// Human-readable label for the key.
    pub label: String,
}

/// Payload returned when a key was generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateApiKeyResponse {
    /// The generated credential.
    pub api_key: String,
}

/// Application-level error reported by the service inside a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Service error code (for example `PMS_PRT_107`).
    pub error_code: String,
    /// Human-readable message supplied by the service.
    pub message: String,
}

/// Wrapper placed around every request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestEnvelope<T> {
    /// Request identifier; left empty for console-originated calls.
    pub id: String,
    /// Envelope version.
    pub version: String,
    /// Time the request was built, UTC with millisecond precision.
    #[serde(with = "request_time")]
    pub requesttime: DateTime<Utc>,
    /// Free-form metadata object; always empty for console requests.
    pub metadata: Map<String, Value>,
    /// The wrapped request body.
    pub request: T,
}

impl<T> RequestEnvelope<T> {
    /// Wrap `request` with the default identifier, version and metadata.
    #[must_use]
    pub fn new(request: T, requesttime: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            version: REQUEST_VERSION.to_string(),
            requesttime,
            metadata: Map::new(),
            request,
        }
    }
}

/// Wrapper returned around every response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    /// Response identifier echoed by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Envelope version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Time the service produced the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsetime: Option<String>,
    /// Payload, absent when the call failed.
    pub response: Option<T>,
    /// Errors reported by the service; `null` and missing both mean none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ServiceError>>,
}

/// Reasons a response envelope carries no usable payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The service reported an application-level error.
    #[error("{}: {}", .0.error_code, .0.message)]
    Service(ServiceError),
    /// Neither a payload nor an error was present.
    #[error("response envelope carried no payload")]
    MissingResponse,
}

impl<T> ResponseEnvelope<T> {
    /// Envelope carrying a successful payload.
    #[must_use]
    pub const fn success(response: T) -> Self {
        Self {
            id: None,
            version: None,
            responsetime: None,
            response: Some(response),
            errors: None,
        }
    }

    /// Envelope carrying a single service error.
    #[must_use]
    pub fn failure(error: ServiceError) -> Self {
        Self {
            id: None,
            version: None,
            responsetime: None,
            response: None,
            errors: Some(vec![error]),
        }
    }

    /// First service error, if any were reported.
    #[must_use]
    pub fn first_error(&self) -> Option<&ServiceError> {
        self.errors.as_deref().and_then(<[ServiceError]>::first)
    }

    /// Resolve the envelope to its payload.
    ///
    /// A present payload wins even when errors were also listed.
    ///
    /// # Errors
    /// Returns [`EnvelopeError::Service`] with the first reported error when
    /// the payload is absent, or [`EnvelopeError::MissingResponse`] when the
    /// service reported nothing at all.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        match self.response {
            Some(response) => Ok(response),
            None => Err(self
                .errors
                .and_then(|errors| errors.into_iter().next())
                .map_or(EnvelopeError::MissingResponse, EnvelopeError::Service)),
        }
    }
}

mod request_time {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(de::Error::custom)
    }
}
