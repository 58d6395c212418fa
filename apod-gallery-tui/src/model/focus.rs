//! 焦点顺序（Tab / Shift+Tab）

use apod_gallery_core::{FocusScope, FocusTarget, GalleryLoader};

/// 当前可获得焦点的元素，按 Tab 顺序排列：加载按钮，然后是各卡片
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    targets: Vec<FocusTarget>,
}

impl FocusRing {
    pub fn from_gallery(loader: &GalleryLoader) -> Self {
        let mut targets = Vec::with_capacity(loader.cards().len() + 1);
        if loader.can_focus(&FocusTarget::Trigger) {
            targets.push(FocusTarget::Trigger);
        }
        targets.extend(loader.cards().iter().map(|card| FocusTarget::Card(card.id)));
        Self { targets }
    }

    /// 下一个焦点；当前焦点不在环中时从头开始
    pub fn next(&self, current: FocusTarget) -> FocusTarget {
        let Some(first) = self.targets.first() else {
            return FocusTarget::Page;
        };
        match self.position(current) {
            Some(i) => self.targets[(i + 1) % self.targets.len()],
            None => *first,
        }
    }

    /// 上一个焦点；当前焦点不在环中时从末尾开始
    pub fn prev(&self, current: FocusTarget) -> FocusTarget {
        let Some(last) = self.targets.last() else {
            return FocusTarget::Page;
        };
        match self.position(current) {
            Some(0) => *last,
            Some(i) => self.targets[i - 1],
            None => *last,
        }
    }

    fn position(&self, target: FocusTarget) -> Option<usize> {
        self.targets.iter().position(|t| *t == target)
    }
}
