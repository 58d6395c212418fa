//! 应用主消息枚举

use apod_gallery_core::{FeedPayload, GalleryResult, LoadTicket};

use super::{CardMessage, ModalMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 激活加载按钮
    LoadGallery,

    /// feed 请求结束
    FeedLoaded {
        ticket: LoadTicket,
        result: GalleryResult<FeedPayload>,
    },

    /// 焦点移到下一个元素（Tab）
    FocusNext,

    /// 焦点移到上一个元素（Shift+Tab）
    FocusPrev,

    /// 选择下一张卡片
    SelectNext,

    /// 选择上一张卡片
    SelectPrev,

    /// 卡片相关消息
    Card(CardMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
