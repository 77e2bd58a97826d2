//! HTTP client for the mess server's polling endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::domain::{DashboardPayload, DashboardSnapshot};

/// Endpoint path, resolved against the dashboard URL's origin.
pub const DATA_ENDPOINT_PATH: &str = "/data-endpoint/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(StatusCode),

    #[error("malformed dashboard payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch seam for the poll worker, so tests can script responses.
#[async_trait]
pub trait MessApi: Send + Sync {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError>;
}

pub struct HttpMessApi {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpMessApi {
    /// Build a client against the dashboard URL's origin. Any path or
    /// query on the given URL is dropped in favor of the data endpoint.
    pub fn new(dashboard_url: &Url) -> anyhow::Result<Self> {
        let endpoint = dashboard_url.join(DATA_ENDPOINT_PATH)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MessApi for HttpMessApi {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response.text().await?;
        let payload: DashboardPayload = serde_json::from_str(&body)?;
        Ok(payload.dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_resolves_against_origin() {
        let url = Url::parse("https://mess.example.edu/some/page?module=billing").expect("url");
        let api = HttpMessApi::new(&url).expect("client");
        assert_eq!(
            api.endpoint().as_str(),
            "https://mess.example.edu/data-endpoint/"
        );
    }
}
