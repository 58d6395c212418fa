//! Core of the APOD gallery.
//!
//! 提供画廊的核心状态机：远程 feed 获取、卡片渲染、详情弹窗与焦点管理。
//! 不包含任何终端代码，前端只读取这里产出的视图模型。
//!
//! ```rust,no_run
//! use apod_gallery_core::{FeedOptions, GalleryLoader, HttpApodFeed};
//! # async fn demo() -> apod_gallery_core::GalleryResult<()> {
//! let feed = HttpApodFeed::new(FeedOptions::default())?;
//! let mut gallery = GalleryLoader::new();
//! gallery.load(&feed).await;
//! for card in gallery.cards() {
//!     println!("{} ({})", card.title, card.date_line);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod feed;
mod focus;
mod gallery;
mod modal;
mod types;

#[cfg(test)]
mod test_utils;

pub use error::{GalleryError, GalleryResult};
pub use feed::{ApodFeed, FeedOptions, HttpApodFeed, DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};
pub use focus::{CardId, FocusScope, FocusState, FocusTarget};
pub use gallery::{
    ActivationKey, CardActivation, CardMedia, GalleryCard, GalleryLoader, GalleryView,
    LiveRegion, LoadTicket, Role, TriggerControl, EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE,
    VIDEO_ALLOW, VIDEO_HEIGHT, VIDEO_WIDTH,
};
pub use modal::{
    ModalController, ModalKey, ModalMedia, ModalPhase, ModalView, PointerTarget, FALLBACK_ALT,
    FALLBACK_LINK_LABEL,
};
pub use types::{interpret_payload, ApodEntry, FeedPayload, MediaKind};
