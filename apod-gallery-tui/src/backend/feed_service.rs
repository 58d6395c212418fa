//! Feed 服务
//!
//! 根据配置创建 feed 客户端。UI 层只持有 `Arc<dyn ApodFeed>`，
//! 请求在运行时的工作线程上执行。

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use apod_gallery_core::{ApodFeed, FeedOptions, HttpApodFeed, DEFAULT_TIMEOUT_SECS};

use super::config_service::AppConfig;

/// 由配置得到请求选项
pub fn feed_options(config: &AppConfig) -> FeedOptions {
    let defaults = FeedOptions::default();
    let timeout_secs = match config.request_timeout_secs {
        0 => DEFAULT_TIMEOUT_SECS,
        secs => secs,
    };

    FeedOptions {
        url: config.feed_url.clone(),
        timeout: Duration::from_secs(timeout_secs),
        user_agent: config
            .user_agent
            .clone()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent),
        system_proxy: defaults.system_proxy,
    }
}

/// 创建 feed 客户端
pub fn build_feed(config: &AppConfig) -> Result<Arc<dyn ApodFeed>> {
    let feed = HttpApodFeed::new(feed_options(config)).context("Invalid feed configuration")?;
    tracing::debug!("Feed client ready for {}", feed.url());
    Ok(Arc::new(feed))
}
