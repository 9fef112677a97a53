use anyhow::{Context, Result};
use async_trait::async_trait;
use homesearch_provider_api::{HomeEntry, SearchTransport};
use serde::Serialize;
use tracing::error;
use url::form_urlencoded;

use crate::PROVIDER_ID;
use crate::answer::entry_from_answer;
use crate::settings::FactSetSettings;
use crate::shapes::FactSetResponse;

/// Placeholder the proxy substitutes with the configured API endpoint.
const API_ENDPOINT_VAR: &str = "%ENV-apiEndpoint%";
/// Placeholder the proxy substitutes with the API credentials.
const AUTHORIZATION_VAR: &str = "Basic %ENV-authorization%";

/// Transport that reaches the FactSet Search Answers API through the backend
/// proxy, which exists to sidestep browser CORS restrictions and to keep
/// credentials out of the client.
pub struct FactSetProxyTransport {
    client: reqwest::Client,
    settings: FactSetSettings,
}

impl FactSetProxyTransport {
    #[must_use]
    pub fn new(settings: FactSetSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }
}

/// Body posted to the proxy; the proxy performs the described request after
/// substituting the `%ENV-…%` placeholders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProxyRequest {
    url: String,
    method: &'static str,
    headers: ProxyHeaders,
    provider_id: &'static str,
}

#[derive(Debug, Serialize)]
struct ProxyHeaders {
    #[serde(rename = "Authorization")]
    authorization: &'static str,
}

impl ProxyRequest {
    fn answers(query: &str) -> Self {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        Self {
            url: format!("{API_ENDPOINT_VAR}/search/answers/v1/data?query={encoded}"),
            method: "get",
            headers: ProxyHeaders {
                authorization: AUTHORIZATION_VAR,
            },
            provider_id: PROVIDER_ID,
        }
    }
}

#[async_trait]
impl SearchTransport for FactSetProxyTransport {
    async fn execute(&self, query: &str) -> Result<Option<HomeEntry>> {
        let response = self
            .client
            .post(&self.settings.proxy_endpoint)
            .json(&ProxyRequest::answers(query))
            .send()
            .await
            .context("proxy request failed")?
            .error_for_status()
            .context("proxy returned an error status")?;

        let body: FactSetResponse = response
            .json()
            .await
            .context("malformed proxy response")?;

        if let Some(errors) = &body.errors {
            error!("factset answers returned errors: {errors}");
        }

        Ok(body
            .data
            .as_ref()
            .and_then(|answer| entry_from_answer(answer, self.settings.icon.as_deref())))
    }
}
