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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 画廊与弹窗的状态机都来自 apod-gallery-core，这里只把它们组合起来，
//! 再加上终端相关的少量状态（滚动位置、终端尺寸、状态栏消息）。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // Tab 顺序（FocusRing）
//!
//!         pub mod state;      // 页面数据状态（GalleryState）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusState,              // 当前焦点（加载按钮 / 卡片 / 弹窗关闭按钮）
//!             pub gallery: GalleryState,          // 画廊状态
//!             pub modal: ModalController,         // 详情弹窗
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub viewport: Rect,                 // 终端尺寸
//!             pub config: AppConfig,              // 配置
//!         }
//!
//!     focus、gallery、modal 是三个独立字段，Update 层可以同时借用：
//!
//!         app.modal.close(&mut app.focus, &app.gallery.loader);
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点顺序（FocusRing）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/focus.rs 中定义：
//!
//!         FocusRing::from_gallery(&loader) 按 Tab 顺序列出可获得焦点的元素：
//!             加载按钮（未禁用时） → 卡片 1 → 卡片 2 → ...
//!
//!         - next(current)：Tab
//!         - prev(current)：Shift+Tab
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext
//!             ↓
//!         update/mod.rs 执行 app.focus.focus(ring.next(current))
//!             ↓
//!         view 层根据 app.focus 高亮加载按钮或卡片
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、画廊状态（GalleryState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/gallery.rs 中定义：
//!
//!         GalleryState {
//!             loader: GalleryLoader,                  // 容器内容、加载按钮、卡片快照
//!             scroll: usize,                          // 第一张可见卡片
//!             last_loaded_at: Option<DateTime<Local>> // 最近一次成功加载时间
//!         }
//!
//!     卡片焦点变化时，Update 层调用 ensure_visible() 让卡片保持在可见范围内。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusRing;
pub use state::GalleryState;
