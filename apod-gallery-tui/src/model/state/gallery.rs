//! 画廊页面状态

use apod_gallery_core::{FocusState, FocusTarget, GalleryLoader};
use chrono::{DateTime, Local};

/// 画廊页面状态
#[derive(Debug)]
pub struct GalleryState {
    /// 加载器（容器内容 + 加载按钮 + 卡片快照）
    pub loader: GalleryLoader,
    /// 卡片列表的滚动位置（第一张可见卡片的索引）
    pub scroll: usize,
    /// 最近一次成功加载的时间
    pub last_loaded_at: Option<DateTime<Local>>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            loader: GalleryLoader::new(),
            scroll: 0,
            last_loaded_at: None,
        }
    }

    /// 获得焦点的卡片在列表中的索引
    pub fn focused_index(&self, focus: &FocusState) -> Option<usize> {
        match focus.current() {
            FocusTarget::Card(id) => self.loader.card_index(id),
            _ => None,
        }
    }

    /// 调整滚动位置，使第 `index` 张卡片位于 `slots` 张可见卡片之内
    pub fn ensure_visible(&mut self, index: usize, slots: usize) {
        let slots = slots.max(1);
        if index < self.scroll {
            self.scroll = index;
        } else if index >= self.scroll + slots {
            self.scroll = index + 1 - slots;
        }
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_visible_scrolls_down_and_up() {
        let mut state = GalleryState::new();

        state.ensure_visible(2, 3);
        assert_eq!(state.scroll, 0);

        state.ensure_visible(5, 3);
        assert_eq!(state.scroll, 3);

        state.ensure_visible(1, 3);
        assert_eq!(state.scroll, 1);
    }

    #[test]
    fn test_ensure_visible_with_zero_slots() {
        let mut state = GalleryState::new();
        state.ensure_visible(4, 0);
        assert_eq!(state.scroll, 4);
    }
}
