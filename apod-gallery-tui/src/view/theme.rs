//! 配色与样式
//!
//! 深色主题取夜空色调，浅色主题取日间色调。组件只通过 [`Styles`]
//! 取样式，不直接拼颜色。

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 0 = NightSky, 1 = Daylight
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 配置文件中的主题名
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

pub fn palette() -> Palette {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => Palette::NIGHT_SKY,
        _ => Palette::DAYLIGHT,
    }
}

/// 按界面元素命名的颜色
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// 弹窗底色
    pub surface: Color,
    pub text: Color,
    /// 卡片、按钮、画廊的边框
    pub frame: Color,
    /// 获得焦点的边框
    pub accent: Color,
    /// 标题栏与状态栏底色
    pub banner: Color,
    pub banner_text: Color,
    /// 获得焦点的按钮或卡片标题
    pub focus_bg: Color,
    pub focus_text: Color,
    /// 媒体地址
    pub link: Color,
    /// `[image]` / `[video]` 标记和快捷键
    pub badge: Color,
    pub status_text: Color,
    pub empty: Color,
    pub error: Color,
    /// 日期、禁用的按钮、提示文字
    pub faint: Color,
}

impl Palette {
    pub const NIGHT_SKY: Self = Self {
        surface: Color::Rgb(13, 17, 33),
        text: Color::Rgb(226, 232, 240),
        frame: Color::Rgb(58, 66, 98),
        accent: Color::Rgb(129, 161, 255),
        banner: Color::Rgb(11, 61, 145),
        banner_text: Color::White,
        focus_bg: Color::Rgb(52, 72, 148),
        focus_text: Color::White,
        link: Color::Rgb(120, 200, 255),
        badge: Color::Rgb(252, 211, 77),
        status_text: Color::Rgb(252, 211, 77),
        empty: Color::Rgb(244, 187, 120),
        error: Color::Rgb(248, 113, 113),
        faint: Color::Rgb(120, 128, 150),
    };

    pub const DAYLIGHT: Self = Self {
        surface: Color::Rgb(248, 250, 252),
        text: Color::Rgb(30, 41, 59),
        frame: Color::Rgb(203, 213, 225),
        accent: Color::Rgb(37, 99, 235),
        banner: Color::Rgb(11, 61, 145),
        banner_text: Color::White,
        focus_bg: Color::Rgb(191, 219, 254),
        focus_text: Color::Black,
        link: Color::Rgb(29, 78, 216),
        badge: Color::Rgb(161, 98, 7),
        status_text: Color::Rgb(254, 240, 138),
        empty: Color::Rgb(180, 83, 9),
        error: Color::Rgb(185, 28, 28),
        faint: Color::Rgb(100, 116, 139),
    };
}

/// 组件样式
pub struct Styles;

impl Styles {
    /// 边框；获得焦点时高亮加粗
    pub fn frame(focused: bool) -> Style {
        let p = palette();
        if focused {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.frame)
        }
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(palette().text)
            .add_modifier(Modifier::BOLD)
    }

    /// 按钮、卡片标题、关闭按钮的文字
    pub fn control(focused: bool) -> Style {
        let p = palette();
        if focused {
            Style::default()
                .bg(p.focus_bg)
                .fg(p.focus_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.text)
        }
    }

    pub fn faint() -> Style {
        Style::default().fg(palette().faint)
    }

    pub fn banner() -> Style {
        let p = palette();
        Style::default().bg(p.banner).fg(p.banner_text)
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(palette().badge)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default().fg(palette().link)
    }

    pub fn status_text() -> Style {
        Style::default().fg(palette().status_text)
    }

    /// 加载中提示
    pub fn loading() -> Style {
        Style::default()
            .fg(palette().accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn empty() -> Style {
        Style::default().fg(palette().empty)
    }

    pub fn error() -> Style {
        Style::default().fg(palette().error)
    }

    /// 弹窗内容框
    pub fn surface() -> Style {
        let p = palette();
        Style::default().bg(p.surface).fg(p.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names_in_config() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }

    #[test]
    fn test_focus_changes_frame_and_control() {
        assert_ne!(Styles::frame(true), Styles::frame(false));
        assert!(Styles::control(true)
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(Styles::control(false).bg, None);
    }
}
