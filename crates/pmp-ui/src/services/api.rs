//! gloo-net client for the partner-manager service.
//!
//! # Design
//! - One client per app boot, shared through `ApiCtx`.
//! - Every call carries the browser session cookie.
//! - Bodies are read as text and decoded by `decode_envelope` so status
//!   handling stays testable off-browser.

use crate::core::config::ConsoleConfig;
use crate::core::error::{ApiError, decode_envelope};
use gloo_net::http::{Request, Response};
use pmp_api_models::ResponseEnvelope;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ConsoleConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ResponseEnvelope<T>, ApiError> {
        let response = Request::get(&self.config.partner_manager_url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_envelope(response).await
    }

    pub(crate) async fn patch_envelope<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseEnvelope<T>, ApiError> {
        let request = Request::patch(&self.config.partner_manager_url(path))
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|err| ApiError::Encode(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ResponseEnvelope<T>, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    decode_envelope(status, &body)
}
