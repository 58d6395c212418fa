//! 画廊更新逻辑

use apod_gallery_core::{FeedPayload, FocusScope, FocusTarget, GalleryResult, LoadTicket};
use chrono::Local;

use super::Effect;
use crate::i18n::t;
use crate::model::App;

/// 激活加载按钮。按钮禁用（已有请求）时忽略
pub fn load(app: &mut App) -> Vec<Effect> {
    let Some(ticket) = app.gallery.loader.activate_trigger() else {
        tracing::debug!("Load ignored, trigger is disabled");
        return Vec::new();
    };

    tracing::info!("Loading gallery from {}", app.config.feed_url);
    app.gallery.scroll = 0;
    app.set_status(t().status_bar.loading);
    release_stale_focus(app);

    vec![Effect::FetchFeed(ticket)]
}

/// feed 请求结束，渲染结果
pub fn finish(app: &mut App, ticket: LoadTicket, result: GalleryResult<FeedPayload>) {
    let outcome = result.as_ref().map(FeedPayload::len).map_err(ToString::to_string);

    app.gallery.loader.finish_load(ticket, result);
    app.gallery.scroll = 0;

    let texts = t();
    match outcome {
        Ok(count) => {
            let now = Local::now();
            app.gallery.last_loaded_at = Some(now);
            app.set_status(format!(
                "{count} {} · {} {}",
                texts.status_bar.entries,
                texts.status_bar.loaded_at,
                now.format("%H:%M:%S")
            ));
        }
        Err(err) => {
            tracing::warn!("Gallery load failed: {err}");
            app.set_status(texts.status_bar.load_failed);
        }
    }

    release_stale_focus(app);
}

/// 焦点所在的元素被移除或禁用时，焦点回到页面
fn release_stale_focus(app: &mut App) {
    let current = app.focus.current();
    if current != FocusTarget::ModalClose && !app.gallery.loader.can_focus(&current) {
        app.focus.blur();
    }
}
