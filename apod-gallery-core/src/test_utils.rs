//! 测试辅助模块
//!
//! 提供 stub feed 和便捷的测试数据工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{GalleryError, GalleryResult};
use crate::feed::ApodFeed;
use crate::types::{ApodEntry, FeedPayload};

// ===== StubFeed =====

/// Feed returning a canned result and counting calls.
pub struct StubFeed {
    result: GalleryResult<FeedPayload>,
    calls: AtomicUsize,
}

impl StubFeed {
    pub fn entries(entries: Vec<ApodEntry>) -> Self {
        Self::with_result(Ok(FeedPayload::Entries(entries)))
    }

    pub fn empty() -> Self {
        Self::with_result(Ok(FeedPayload::Empty))
    }

    pub fn failing(err: GalleryError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: GalleryResult<FeedPayload>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApodFeed for StubFeed {
    async fn fetch(&self) -> GalleryResult<FeedPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ===== 测试数据 =====

pub fn entry(title: &str, media_type: &str, url: &str) -> ApodEntry {
    ApodEntry {
        title: title.to_string(),
        date: "2024-01-01".to_string(),
        explanation: format!("About {title}"),
        media_type: media_type.to_string(),
        url: url.to_string(),
    }
}

/// One entry of each media class, in a fixed order.
pub fn sample_entries() -> Vec<ApodEntry> {
    vec![
        entry("Andromeda", "image", "https://apod.nasa.gov/m31.jpg"),
        entry("Launch Replay", "video", "https://www.youtube.com/embed/abc"),
        entry("Sky Map", "other", "https://apod.nasa.gov/map.html"),
    ]
}
