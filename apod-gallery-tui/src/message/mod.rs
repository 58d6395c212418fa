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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod card;
//!         mod modal;
//!
//!         pub use app::AppMessage;
//!         pub use card::CardMessage;
//!         pub use modal::ModalMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive(Debug)]
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             LoadGallery,                        // 激活加载按钮
//!             FeedLoaded { ticket, result },      // 异步任务回传的 feed 结果
//!             FocusNext, FocusPrev,               // Tab / Shift+Tab
//!             SelectNext, SelectPrev,             // ↓ / ↑
//!             Card(CardMessage),                  // 卡片子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!     FeedLoaded 携带 LoadTicket，而 LoadTicket 不能复制（每次加载只能结束一次），
//!     所以 AppMessage 只派生 Debug。
//!
//!
//!     分别分出
//!         card.rs             专门处理卡片激活的子消息
//!         modal.rs            专门处理弹窗相关的子消息
//!
//!     它们都接受 app::AppMessage 的调用。
//!
//!
//!
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             ...                                          ↑↑↑↑↑↑↑↑↑↑
//!             ...                                          返回一个 AppMessage 类型
//!             match event {
//!                 Event::Key(key) => handle_key_event(key, app),
//!                 Event::Mouse(mouse) => handle_mouse_event(mouse, app),
//!                 _ => AppMessage::Noop
//!             }
//!         }
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod card;
mod modal;

pub use app::AppMessage;
pub use card::CardMessage;
pub use modal::ModalMessage;
