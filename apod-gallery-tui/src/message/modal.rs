//! 弹窗消息

use apod_gallery_core::{ModalKey, PointerTarget};

/// 弹窗消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 弹窗打开时的按键
    Key(ModalKey),

    /// 弹窗打开时的鼠标点击
    Pointer(PointerTarget),

    /// 激活关闭按钮
    CloseControl,
}
