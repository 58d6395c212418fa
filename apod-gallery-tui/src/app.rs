//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!
//!     app.viewport = terminal.size()                  // 记录终端尺寸，供鼠标命中测试使用
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }
//!     inbox 中的消息逐条交给 update                   // 异步任务（feed 请求）的结果
//!     if let Some(event) = poll_event() {             // 等待输入，最长 100ms
//!         let msg = handle_event(event , &app);
//!         let effects = update::update(&mut app , msg);
//!         execute_effects(effects)                    // 启动 feed 请求等副作用
//!     }
//! }

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use apod_gallery_core::ApodFeed;
use ratatui::layout::Rect;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Effect};
use crate::util::Term;
use crate::view;

/// 异步任务回传消息的发送端
type Inbox = mpsc::UnboundedSender<AppMessage>;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    handle: &Handle,
    feed: Arc<dyn ApodFeed>,
) -> Result<()> {
    let (inbox_tx, mut inbox_rx) = mpsc::unbounded_channel();

    loop {
        // 1. 记录终端尺寸
        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 处理异步任务回传的消息
        while let Ok(msg) = inbox_rx.try_recv() {
            let effects = update::update(app, msg);
            execute_effects(effects, handle, &feed, &inbox_tx);
        }

        // 5. 轮询事件（100ms 超时），处理并执行副作用
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let effects = update::update(app, msg);
            execute_effects(effects, handle, &feed, &inbox_tx);
        }
    }

    Ok(())
}

/// 执行 update 返回的副作用
fn execute_effects(
    effects: Vec<Effect>,
    handle: &Handle,
    feed: &Arc<dyn ApodFeed>,
    inbox: &Inbox,
) {
    for effect in effects {
        match effect {
            Effect::FetchFeed(ticket) => {
                let feed = Arc::clone(feed);
                let inbox = inbox.clone();
                tracing::debug!("Spawning feed request #{}", ticket.seq());
                handle.spawn(async move {
                    let result = feed.fetch().await;
                    // 接收端只会在退出时关闭，此时结果已无意义
                    let _ = inbox.send(AppMessage::FeedLoaded { ticket, result });
                });
            }
        }
    }
}
