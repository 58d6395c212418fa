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
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。每一帧都根据 App 完整重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod layout;         // 布局计算（也用于鼠标命中测试）
//!         pub mod theme;          // 主题和样式
//!         pub mod components;     // 加载按钮、状态栏、详情弹窗
//!         mod pages;              // 画廊区域
//!
//!
//!     屏幕布局（从上到下）：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │ APOD Gallery v0.1.0                          │  标题栏
//!         │ ┌──────────────────────┐                     │
//!         │ │  Fetch Space Images  │                     │  加载按钮
//!         │ └──────────────────────┘                     │
//!         │┌ Astronomy Picture of the Day ──────────────┐│
//!         ││┌ The Andromeda Galaxy ────────────────────┐││
//!         │││Date: 2024-10-01                          │││  卡片
//!         │││[image] https://apod.nasa.gov/...         │││
//!         │││Our nearest large galactic neighbour.     │││
//!         ││└──────────────────────────────────────────┘││
//!         │└────────────────────────────────────────────┘│
//!         │ f Load │ Tab Focus │ q Quit │ Ready          │  状态栏
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗打开时，整个屏幕变暗，居中绘制详情内容框。
//!
//!
//! 在 src/app.rs 中，有：
//!     terminal.draw(|frame| view::render(app, frame))?;
//!

pub mod components;
pub mod layout;
mod pages;
pub mod theme;

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::i18n::t;
use crate::model::App;

use layout::AppLayout;
use theme::Styles;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    let layout = AppLayout::compute(frame.area());

    render_title_bar(frame, layout.title);
    components::trigger::render(app, frame, layout.trigger);
    pages::gallery::render(app, frame, &layout);
    components::statusbar::render(app, frame, layout.status);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Styles::banner());
    frame.render_widget(title, area);
}
