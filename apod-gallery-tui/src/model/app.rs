//! 应用主状态结构

use apod_gallery_core::{FocusState, ModalController};
use ratatui::layout::Rect;

use super::GalleryState;
use crate::backend::AppConfig;
use crate::i18n::{set_language, Language};
use crate::view::theme::set_theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusState,

    /// 画廊状态
    pub gallery: GalleryState,

    /// 详情弹窗
    pub modal: ModalController,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 最近一次绘制时的终端区域（鼠标命中测试用）
    pub viewport: Rect,

    /// 当前配置
    pub config: AppConfig,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        let language = Language::from_code(&config.language).unwrap_or_default();
        tracing::debug!("UI language {}, theme {:?}", language.code(), config.theme);
        set_language(language);
        set_theme(config.theme);

        Self {
            should_quit: false,
            focus: FocusState::new(),
            gallery: GalleryState::new(),
            modal: ModalController::new(),
            status_message: None,
            viewport: Rect::new(0, 0, 80, 24),
            config,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
