use crate::utils::AppError;
use serde_json::Value;
use std::time::Duration;

pub const NEWS_QUERY: &str = "climate change OR sustainability";
pub const NEWS_PAGE_SIZE: u32 = 5;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upstream answer, relayed as-is.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

/// Client for the news search endpoint. Shared across workers through `web::Data`.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn new(url: &str, api_key: Option<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("greensphere-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::UpstreamError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: url.to_string(),
            api_key,
        })
    }

    /// Fetches the latest climate/sustainability headlines. Any status the
    /// provider answers with is returned; only transport failures and
    /// non-JSON bodies become errors.
    pub async fn fetch_eco_news(&self) -> Result<UpstreamResponse, AppError> {
        log::info!("📰 Fetching eco news from {}", self.url);

        let page_size = NEWS_PAGE_SIZE.to_string();
        let mut request = self
            .http
            .get(&self.url)
            .header("Accept", "application/json")
            .query(&[("q", NEWS_QUERY), ("pageSize", page_size.as_str())]);

        if let Some(key) = &self.api_key {
            request = request.query(&[("apiKey", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Failed to reach news provider: {}", e)))?;

        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Failed to parse news response: {}", e)))?;

        if status >= 400 {
            log::warn!("⚠️ News provider answered {}", status);
        } else {
            log::info!("✅ News provider answered {}", status);
        }

        Ok(UpstreamResponse { status, body })
    }
}
