//! 英文翻译 (en-US)

use apod_gallery_core::{EMPTY_MESSAGE, ERROR_MESSAGE, FALLBACK_LINK_LABEL, LOADING_MESSAGE};

use super::keys::{
    CommonTexts, GalleryTexts, HintTexts, ModalTexts, StatusBarTexts, Translations, TriggerTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "APOD Gallery",
        quit: "Quit",
    },

    hints: HintTexts {
        load: "Load",
        focus: "Focus",
        select: "Select",
        open: "Open",
        close: "Close",
    },

    trigger: TriggerTexts {
        label: "Fetch Space Images",
        busy: "Fetching…",
    },

    // ========================================================================
    // 画廊（提示文字与网页版保持一致）
    // ========================================================================
    gallery: GalleryTexts {
        title: "Astronomy Picture of the Day",
        idle: "Press f to load space photos.",
        loading: LOADING_MESSAGE,
        empty: EMPTY_MESSAGE,
        error: ERROR_MESSAGE,
        media_image: "image",
        media_video: "video",
        media_none: "no preview",
    },

    modal: ModalTexts {
        image: "Image",
        video: "Video",
        open_media: FALLBACK_LINK_LABEL,
        close_button: "Close",
    },

    status_bar: StatusBarTexts {
        ready: "Ready",
        loading: "Loading...",
        entries: "entries",
        loaded_at: "loaded at",
        load_failed: "Load failed, see log",
    },
};
