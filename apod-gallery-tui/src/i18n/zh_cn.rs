//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, GalleryTexts, HintTexts, ModalTexts, StatusBarTexts, Translations, TriggerTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "每日天文图",
        quit: "退出",
    },

    hints: HintTexts {
        load: "加载",
        focus: "切换焦点",
        select: "选择",
        open: "查看",
        close: "关闭",
    },

    trigger: TriggerTexts {
        label: "获取太空图片",
        busy: "获取中…",
    },

    gallery: GalleryTexts {
        title: "每日天文图",
        idle: "按 f 加载太空图片。",
        loading: "🔄 正在加载太空图片…",
        empty: "暂无图片。",
        error: "获取 APOD 数据失败，详情请查看日志。",
        media_image: "图片",
        media_video: "视频",
        media_none: "无预览",
    },

    modal: ModalTexts {
        image: "图片",
        video: "视频",
        open_media: "打开媒体",
        close_button: "关闭",
    },

    status_bar: StatusBarTexts {
        ready: "就绪",
        loading: "加载中...",
        entries: "条",
        loaded_at: "加载于",
        load_failed: "加载失败，详见日志",
    },
};
