//! Failures surfaced by the HTTP client and their banner mapping.
//!
//! # Design
//! - Transport failures keep their message verbatim and carry no code.
//! - Service errors map to the first reported code + message pair.
//! - Banner text is either a translation key or raw text; views resolve it.

use pmp_api_models::{EnvelopeError, ResponseEnvelope};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while talking to the partner-manager service.
///
/// Application-level failures reported inside a response envelope are not
/// represented here; they travel as `pmp_api_models::EnvelopeError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// A successful response body did not match the expected envelope.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A non-success status whose body was not an envelope.
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw body, kept for console diagnostics.
        body: String,
    },
}

/// Decode a response body into an envelope.
///
/// A non-success status whose body is still an envelope is returned as the
/// envelope, so service errors reach the banner with their code.
///
/// # Errors
/// Returns [`ApiError::Status`] for an undecodable non-success body and
/// [`ApiError::Decode`] for an undecodable success body.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ResponseEnvelope<T>, ApiError> {
    match serde_json::from_str::<ResponseEnvelope<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status {
            status,
            body: body.to_string(),
        }),
        Err(err) => Err(ApiError::Decode(err.to_string())),
    }
}

/// Text shown in the error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerText {
    /// Message resolved from the translation bundles.
    Translated {
        /// Dotted translation key.
        key: &'static str,
        /// English fallback when the key is missing.
        default: &'static str,
    },
    /// Message displayed verbatim.
    Raw(String),
}

/// Error banner contents: an optional service code and a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Service error code, when the service supplied one.
    pub code: Option<String>,
    /// Message to display.
    pub message: BannerText,
}

impl ErrorBanner {
    /// Banner for a transport failure; the error text is shown as-is.
    #[must_use]
    pub fn from_api_error(err: &ApiError) -> Self {
        Self {
            code: None,
            message: BannerText::Raw(err.to_string()),
        }
    }

    /// Banner for an envelope without payload.
    ///
    /// The first service error wins; with none reported, `generic` is shown.
    #[must_use]
    pub fn from_envelope_error(err: EnvelopeError, generic: BannerText) -> Self {
        match err {
            EnvelopeError::Service(service) => Self {
                code: Some(service.error_code),
                message: BannerText::Raw(service.message),
            },
            EnvelopeError::MissingResponse => Self {
                code: None,
                message: generic,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, BannerText, ErrorBanner, decode_envelope};
    use pmp_api_models::{EnvelopeError, GenerateApiKeyResponse, ServiceError};
    use pmp_test_support::fixtures::{GENERATE_SERVICE_ERROR_JSON, GENERATE_SUCCESS_JSON};

    const GENERIC: BannerText = BannerText::Translated {
        key: "generate_api_key.error_in_response",
        default: "Unexpected response from the server.",
    };

    #[test]
    fn service_error_keeps_code_and_message() {
        let banner = ErrorBanner::from_envelope_error(
            EnvelopeError::Service(ServiceError {
                error_code: "PMS_PRT_107".to_string(),
                message: "Label already exists".to_string(),
            }),
            GENERIC,
        );
        assert_eq!(banner.code.as_deref(), Some("PMS_PRT_107"));
        assert_eq!(
            banner.message,
            BannerText::Raw("Label already exists".to_string())
        );
    }

    #[test]
    fn missing_response_uses_generic_text() {
        let banner = ErrorBanner::from_envelope_error(EnvelopeError::MissingResponse, GENERIC);
        assert_eq!(banner.code, None);
        assert_eq!(banner.message, GENERIC);
    }

    #[test]
    fn transport_error_is_verbatim_without_code() {
        let banner = ErrorBanner::from_api_error(&ApiError::Transport("offline".to_string()));
        assert_eq!(banner.code, None);
        assert_eq!(
            banner.message,
            BannerText::Raw("request failed: offline".to_string())
        );
    }

    #[test]
    fn display_is_user_facing() {
        assert_eq!(
            ApiError::Transport("Failed to fetch".to_string()).to_string(),
            "request failed: Failed to fetch"
        );
        assert_eq!(
            ApiError::Status {
                status: 502,
                body: "<html>".to_string()
            }
            .to_string(),
            "server responded with status 502"
        );
    }

    #[test]
    fn decode_accepts_envelopes_on_any_status() {
        let ok = decode_envelope::<GenerateApiKeyResponse>(200, GENERATE_SUCCESS_JSON)
            .expect("success decodes");
        assert_eq!(ok.response.map(|r| r.api_key).as_deref(), Some("abc123"));
        let failed = decode_envelope::<GenerateApiKeyResponse>(400, GENERATE_SERVICE_ERROR_JSON)
            .expect("error envelope decodes");
        assert!(failed.first_error().is_some());
    }

    #[test]
    fn decode_distinguishes_status_from_shape_errors() {
        assert_eq!(
            decode_envelope::<GenerateApiKeyResponse>(503, "<html>busy</html>"),
            Err(ApiError::Status {
                status: 503,
                body: "<html>busy</html>".to_string()
            })
        );
        assert!(matches!(
            decode_envelope::<GenerateApiKeyResponse>(200, "not json"),
            Err(ApiError::Decode(_))
        ));
    }
}
