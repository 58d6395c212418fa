//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改 + Effect │   │
//！│  │        │               │ CardMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ ModalMsg  │          ┌──────────┐         │   │
//！│  │   │  View   │          └───────────┘   ┌───── │  Model   │         │   │
//！│  │   │   层    │ ◀──────── 读取 ──────────┘      └──────────┘         │   │
//！│  │   └────┬────┘                                                      │   │
//！│  └────────│──────────────────────────────────────────────────────────┘   │
//！│           │                          Effect::FetchFeed │  ▲ FeedLoaded   │
//！│           ▼                                            ▼  │ (inbox)      │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ apod-gallery-core │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! Update 层是唯一修改 Model 的地方。它是同步的纯状态转换：
//! 需要网络请求时不直接执行，而是返回 Effect，由主循环去执行。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod card;           // 卡片激活 → 打开弹窗
//!         mod gallery;        // 加载按钮、feed 结果
//!         mod modal;          // 弹窗关闭（Esc / 遮罩层 / 关闭按钮）
//!
//!
//!     副作用：
//!         pub enum Effect {
//!             FetchFeed(LoadTicket),      // 启动一次 feed 请求
//!         }
//!
//!     一次完整的加载：
//!
//!         AppMessage::LoadGallery
//!             ↓  gallery::load()          容器显示加载中，按钮禁用
//!         Effect::FetchFeed(ticket)
//!             ↓  app.rs 在 tokio 运行时上执行 feed.fetch()
//!         AppMessage::FeedLoaded { ticket, result }
//!             ↓  gallery::finish()        容器显示卡片 / 空状态 / 错误，按钮恢复
//!
//!
//!     焦点：
//!         Tab / Shift+Tab 在 FocusRing 中循环；↑↓ 只在卡片之间移动。
//!         弹窗打开时焦点停在关闭按钮上，不响应焦点移动。
//!

mod card;
mod gallery;
mod modal;

use apod_gallery_core::{FocusTarget, LoadTicket};

use crate::message::AppMessage;
use crate::model::{App, FocusRing};
use crate::view::layout::card_slots;

/// Update 产生、由主循环执行的副作用
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// 启动 feed 请求，结果以 `AppMessage::FeedLoaded` 送回
    FetchFeed(LoadTicket),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Effect> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::LoadGallery => {
            return gallery::load(app);
        }

        AppMessage::FeedLoaded { ticket, result } => {
            gallery::finish(app, ticket, result);
        }

        AppMessage::FocusNext => {
            if !app.modal.is_open() {
                let next = FocusRing::from_gallery(&app.gallery.loader).next(app.focus.current());
                move_focus(app, next);
            }
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                let prev = FocusRing::from_gallery(&app.gallery.loader).prev(app.focus.current());
                move_focus(app, prev);
            }
        }

        AppMessage::SelectNext => {
            if !app.modal.is_open() {
                select_card(app, 1);
            }
        }

        AppMessage::SelectPrev => {
            if !app.modal.is_open() {
                select_card(app, -1);
            }
        }

        AppMessage::Card(card_msg) => {
            card::update(app, card_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    Vec::new()
}

/// 移动焦点；落在卡片上时滚动到可见位置
fn move_focus(app: &mut App, target: FocusTarget) {
    app.focus.focus(target);
    if let Some(index) = app.gallery.focused_index(&app.focus) {
        app.gallery.ensure_visible(index, card_slots(app.viewport));
    }
}

/// ↑↓ 选择卡片。第一张卡片再向上回到加载按钮
fn select_card(app: &mut App, step: isize) {
    let cards = app.gallery.loader.cards();
    if cards.is_empty() {
        return;
    }

    let target = match app.gallery.focused_index(&app.focus) {
        None if step > 0 => FocusTarget::Card(cards[0].id),
        None => return,
        Some(0) if step < 0 => {
            if app.gallery.loader.trigger().is_some_and(|t| !t.disabled) {
                FocusTarget::Trigger
            } else {
                return;
            }
        }
        Some(i) => {
            let next = i.saturating_add_signed(step).min(cards.len() - 1);
            FocusTarget::Card(cards[next].id)
        }
    };
    move_focus(app, target);
}

#[cfg(test)]
pub(crate) mod test_support {
    use apod_gallery_core::{ApodEntry, FeedPayload};

    use super::{update, Effect};
    use crate::message::AppMessage;
    use crate::model::App;

    pub fn entry(title: &str, media_type: &str) -> ApodEntry {
        ApodEntry {
            title: title.to_string(),
            date: "2024-10-01".to_string(),
            explanation: format!("About {title}"),
            media_type: media_type.to_string(),
            url: format!("https://apod.nasa.gov/{title}"),
        }
    }

    /// 走完一次完整的加载流程
    pub fn load_entries(app: &mut App, titles: &[&str]) {
        let mut effects = update(app, AppMessage::LoadGallery);
        let Some(Effect::FetchFeed(ticket)) = effects.pop() else {
            panic!("expected a fetch effect");
        };
        let entries = titles.iter().map(|t| entry(t, "image")).collect();
        update(
            app,
            AppMessage::FeedLoaded {
                ticket,
                result: Ok(FeedPayload::Entries(entries)),
            },
        );
    }
}
