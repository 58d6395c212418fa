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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件（左键点击、滚轮）
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，重绘终端
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     弹窗关闭时：
//!         q / Ctrl+C      → AppMessage::Quit
//!         f               → AppMessage::LoadGallery
//!         Tab / Shift+Tab → AppMessage::FocusNext / FocusPrev
//!         ↑↓ (k/j)        → AppMessage::SelectPrev / SelectNext
//!         Enter / Space   → 焦点在加载按钮：LoadGallery
//!                           焦点在卡片：Card(Activate { .. })
//!         Esc             → AppMessage::ClearStatus
//!
//!     弹窗打开时：
//!         Esc             → Modal(Key(Escape))
//!         Enter / Space   → Modal(CloseControl)（焦点在关闭按钮上）
//!         q / Ctrl+C      → AppMessage::Quit
//!         其他按键        → Modal(Key(Other))，不会关闭弹窗
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 鼠标命中测试
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     点击坐标与 view::layout 计算出的区域比较（使用 app.viewport）：
//!
//!         弹窗打开：  关闭按钮 → CloseControl
//!                     内容框内 → Pointer(Content)
//!                     内容框外 → Pointer(Backdrop)，关闭弹窗
//!         弹窗关闭：  加载按钮 → LoadGallery
//!                     卡片     → Card(Activate { activation: Click })
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
