//! APOD Gallery TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与 feed 服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口，执行：
//!
//!     init_logging()          // 日志写入文件（stdout 属于 TUI）
//!     LocalConfigService      // 读取配置
//!     tokio Runtime           // 网络请求在运行时的工作线程上执行
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{apply_env_overrides, build_feed, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 初始化日志
    let log_path = init_logging();

    // 2. 加载配置（首次运行时写出默认配置，方便用户修改）
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            tracing::warn!("Could not write default config: {e:#}");
        }
    }
    let config = apply_env_overrides(config);
    tracing::info!(
        "Starting APOD gallery (feed: {}, log: {:?})",
        config.feed_url,
        log_path
    );

    // 3. 创建 feed 客户端和异步运行时
    let feed = build_feed(&config)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(config);
    let result = app::run(&mut terminal, &mut app, runtime.handle(), feed);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Application error: {e:#}");
    }
    result
}
