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
//! src/backend/mod.rs
//! Backend 层：配置与 feed 服务
//!
//! Backend 层与 UI 完全解耦，只负责两件事：读写配置文件，以及根据配置
//! 创建 apod-gallery-core 的 feed 客户端。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod feed_service;       // feed 客户端创建
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/apod-gallery/config.json
//!
//!         主要方法：
//!             - load()            读取配置；文件不存在或格式错误时使用默认值
//!             - save(config)      写入配置（格式化 JSON，自动创建目录）
//!
//!         环境变量：
//!             - APOD_GALLERY_FEED_URL     覆盖配置中的 feed 地址
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、Feed 服务
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/feed_service.rs 中定义：
//!
//!         build_feed(config) 返回 Arc<dyn ApodFeed>。
//!         超时为 0 时使用默认超时；User-Agent 为空时使用默认值。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 f（或在加载按钮上按 Enter）
//!         ↓
//!     Update 层处理 AppMessage::LoadGallery，返回 Effect::FetchFeed
//!         ↓
//!     主循环在 tokio 运行时上启动任务，调用 feed.fetch()
//!         ↓
//!     任务把结果作为 AppMessage::FeedLoaded 发回 inbox
//!         ↓
//!     Update 层更新 Model 状态
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod feed_service;

pub use config_service::{apply_env_overrides, AppConfig, ConfigService, LocalConfigService};
pub use feed_service::build_feed;
