//! 卡片消息

use apod_gallery_core::{CardActivation, CardId};

/// 卡片消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMessage {
    /// 点击卡片，或在卡片上按键
    Activate {
        id: CardId,
        activation: CardActivation,
    },
}
