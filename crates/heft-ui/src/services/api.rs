//! HTTP client for the Heft API.

use crate::core::error::ApiError;
use crate::core::logic::build_api_url;
use crate::core::settings::{SettingsMap, SettingsSource};
use async_trait::async_trait;
use gloo_net::http::Request;
use heft_api_models::{ProblemDetails, SETTINGS_PATH, SettingsResponse};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&build_api_url(&self.base_url, path))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|err| ApiError::Transport {
                detail: err.to_string(),
            })?;
        if !response.ok() {
            let status = response.status();
            let detail = response
                .json::<ProblemDetails>()
                .await
                .ok()
                .map(|problem| problem.message().to_string());
            return Err(ApiError::Status { status, detail });
        }
        response.json::<T>().await.map_err(|err| ApiError::Decode {
            detail: err.to_string(),
        })
    }

    pub(crate) async fn fetch_settings(&self) -> Result<SettingsMap, ApiError> {
        let body: SettingsResponse = self.get_json(SETTINGS_PATH).await?;
        Ok(body.settings)
    }
}

#[async_trait(?Send)]
impl SettingsSource for ApiClient {
    async fn read_settings(&self) -> Result<SettingsMap, ApiError> {
        self.fetch_settings().await
    }
}
