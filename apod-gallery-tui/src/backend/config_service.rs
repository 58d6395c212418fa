//! 配置服务
//!
//! 配置文件：`~/.config/apod-gallery/config.json`（按平台取配置目录）

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apod_gallery_core::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖 feed 地址的环境变量
pub const FEED_URL_ENV: &str = "APOD_GALLERY_FEED_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub feed_url: String,
    pub request_timeout_secs: u64,
    /// 为空时使用默认 User-Agent
    pub user_agent: Option<String>,
    pub language: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            language: "en-US".to_string(),
            theme: Theme::Dark,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("apod-gallery")
        .join("config.json")
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed config {}: {e}",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

/// 应用环境变量覆盖
pub fn apply_env_overrides(config: AppConfig) -> AppConfig {
    override_feed_url(config, std::env::var(FEED_URL_ENV).ok())
}

fn override_feed_url(mut config: AppConfig, value: Option<String>) -> AppConfig {
    if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        tracing::info!("Feed URL overridden by {FEED_URL_ENV}");
        config.feed_url = url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));

        let config = AppConfig {
            feed_url: "http://localhost:8080/data.json".to_string(),
            language: "zh-CN".to_string(),
            theme: Theme::Light,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_feed_url_override() {
        let config = override_feed_url(
            AppConfig::default(),
            Some(" http://mirror/data.json ".into()),
        );
        assert_eq!(config.feed_url, "http://mirror/data.json");

        let config = override_feed_url(AppConfig::default(), Some("   ".into()));
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);

        let config = override_feed_url(AppConfig::default(), None);
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    }
}
