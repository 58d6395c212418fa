//! 日志初始化

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "apod-gallery.log";

/// 日志文件路径：`<cache_dir>/apod-gallery/apod-gallery.log`
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("apod-gallery").join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// `RUST_LOG` 指令解析为过滤器；未设置全局级别时默认 info
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// 初始化 tracing（同时接管 `log` 宏的输出）
///
/// 返回实际写入的日志文件路径；无法打开文件时日志被丢弃，返回 `None`。
pub fn init_logging() -> Option<PathBuf> {
    let opened = log_file_path().and_then(|path| open_log_file(&path).map(|file| (path, file)));

    let (writer, path) = match opened {
        Some((path, file)) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        None => (BoxMakeWriter::new(std::io::sink), None),
    };

    // 已有全局 subscriber 时（例如测试中）忽略
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(env_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .try_init();

    path
}
