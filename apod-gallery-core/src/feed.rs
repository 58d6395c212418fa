//! Remote APOD feed client.
//!
//! The feed is a single static JSON document: one GET, no authentication, no
//! pagination. The trait exists so the loader can be driven by a stub in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{GalleryError, GalleryResult};
use crate::types::{interpret_payload, FeedPayload};

/// Default public feed location.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Source of APOD entries.
#[async_trait]
pub trait ApodFeed: Send + Sync {
    /// Fetch and interpret the whole feed.
    async fn fetch(&self) -> GalleryResult<FeedPayload>;
}

/// Options for [`HttpApodFeed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Honour `HTTP_PROXY` / `HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("apod-gallery/{}", env!("CARGO_PKG_VERSION")),
            system_proxy: true,
        }
    }
}

/// HTTP implementation of [`ApodFeed`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApodFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpApodFeed {
    pub fn new(options: FeedOptions) -> GalleryResult<Self> {
        let url = options.url.trim().to_string();
        if url.is_empty() {
            return Err(GalleryError::InvalidConfig(
                "Feed URL is required".to_string(),
            ));
        }

        let mut builder = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent);
        if !options.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| GalleryError::InvalidConfig(format!("Failed to build client: {e}")))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ApodFeed for HttpApodFeed {
    async fn fetch(&self) -> GalleryResult<FeedPayload> {
        log::debug!("[feed] GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GalleryError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        log::debug!("[feed] Response Status: {}", status.as_u16());

        let text = response
            .text()
            .await
            .map_err(|e| GalleryError::NetworkError(format!("Failed to read response body: {e}")))?;

        // 状态码不作判断：非 2xx 但能解析的 body 照常解释（非数组即为空）
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                GalleryError::ParseError(format!("Failed to parse response: {e}"))
            } else {
                GalleryError::HttpStatus {
                    status: status.as_u16(),
                }
            }
        })?;

        let payload = interpret_payload(body);
        log::debug!("[feed] {} entries", payload.len());
        Ok(payload)
    }
}
