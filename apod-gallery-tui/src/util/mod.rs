//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：终端和日志
//!
//!     src/util/mod.rs
//!         mod logging;        // 日志写入缓存目录下的文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端（terminal.rs）：
//!
//!         init_terminal()     原始模式 + 备用屏幕 + 鼠标捕获
//!         restore_terminal()  逆序撤销，并显示光标
//!
//!         画廊需要鼠标事件：点击卡片打开详情，点击弹窗外的遮罩关闭弹窗，
//!         滚轮在卡片间移动。所以 init_terminal 会开启 EnableMouseCapture，
//!         restore_terminal 必须对应地关闭，否则退出后终端仍在上报鼠标序列。
//!
//!         main.rs 在 app::run 返回后先调用 restore_terminal，再处理 run 的结果：
//!
//!             let result = app::run(&mut terminal, &mut app, runtime.handle(), feed);
//!             restore_terminal(&mut terminal)?;
//!             result
//!
//!
//!     日志（logging.rs）：
//!
//!         init_logging() -> Option<PathBuf>
//!
//!         stdout 归 TUI 所有，tracing 输出写入
//!         <cache_dir>/apod-gallery/apod-gallery.log（无 ANSI 颜色），
//!         打不开文件时丢弃。核心库的 log 记录（请求地址、响应状态、
//!         获取失败的完整错误）经 tracing-log 汇入同一文件。
//!
//!         级别由 RUST_LOG 控制，未给出全局级别时为 info：
//!             RUST_LOG=debug                    所有 debug 记录
//!             RUST_LOG=info,apod_gallery_core=debug  只放开核心库的 debug
//!
//!     —— 去往 src/app.rs 主循环吧
//!

//!         mod logging;        // 日志初始化（写入文件）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     终端类型定义：
//!         在 src/util/terminal.rs 中，有：
//!
//!             // 类型别名，简化长类型名
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         这样在其他地方就可以使用 Term 而不是完整的类型名：
//!
//!             // 不用别名
//!             fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, ...) { }
//!
//!             // 使用别名
//!             fn run(terminal: &mut Term, ...) { }
//!
//!
//!     初始化终端：
//!         在 src/util/terminal.rs 中，有：
//!
//!             pub fn init_terminal() -> Result<Term> {
//!                 enable_raw_mode()?;                     // 1. 启用原始模式
//!                 let mut stdout = io::stdout();
//!                 execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;   // 2. 进入备用屏幕，捕获鼠标
//!
//!                 let backend = CrosstermBackend::new(stdout);
//!                 let terminal = Terminal::new(backend)?;    // 3. 创建终端对象
//!
//!                 Ok(terminal)
//!             }
//!
//!         关键概念：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - 终端有两个缓冲区：主屏幕和备用屏幕
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容（不会覆盖原有内容）
//!             - 类似 vim、htop 等工具的行为
//!
//!         · Mouse Capture（鼠标捕获）
//!             - 点击弹窗外的遮罩层会关闭弹窗
//!             - 点击卡片会打开详情
//!
//!
//!     恢复终端：
//!         在 src/util/terminal.rs 中，有：
//!
//!             pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
//!                 disable_raw_mode()?;                       // 1. 禁用原始模式
//!                 execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;  // 2. 离开备用屏幕
//!                 terminal.show_cursor()?;                   // 3. 显示光标
//!                 Ok(())
//!             }
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用此函数！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     使用方式：
//!         在 src/main.rs 中，有：
//!
//!             fn main() -> Result<(), anyhow::Error> {
//!                 // 1. 初始化终端
//!                 let mut terminal = init_terminal()?;
//!
//!                 // 2. 创建应用实例
//!                 let mut app = model::App::new(config);
//!
//!                 // 3. 运行主循环
//!                 let result = app::run(&mut terminal, &mut app, runtime.handle(), feed);
//!
//!                 // 4. 恢复终端（无论成功失败都执行）
//!                 restore_terminal(&mut terminal)?;
//!
//!                 // 5. 返回结果
//!                 return result;
//!             }
//!
//!         关键：第 4 步在 app::run 之后立即执行，即使 run 返回错误，
//!               也会先恢复终端，再返回错误结果。
//!
//!
//!
//!     日志：
//!         在 src/util/logging.rs 中，有：
//!
//!             pub fn init_logging() -> Option<PathBuf>
//!
//!         stdout 被 TUI 占用，日志写入缓存目录下的 apod-gallery.log，
//!         打不开文件时丢弃日志。核心库通过 log 宏输出的记录也会汇入这里。
//!         日志级别由 RUST_LOG 控制，默认 info。
//!
//!
//! Util 层在应用启动时初始化终端，在应用退出时恢复终端。
//! 主循环在初始化后的终端中运行。
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
