//! 主布局
//!
//! 布局计算是纯函数：View 层用它绘制，Event 层用同样的结果做鼠标命中测试。

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 每张卡片占用的行数（边框 2 行 + 日期与媒体 1 行 + 简介 2 行 + 间隔 1 行）
pub const CARD_HEIGHT: u16 = 6;

/// 主界面各区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// 标题栏
    pub title: Rect,
    /// 加载按钮
    pub trigger: Rect,
    /// 画廊区域（含边框）
    pub gallery: Rect,
    /// 状态栏
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        // 四层布局：标题栏 + 加载按钮 + 画廊 + 状态栏
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 标题栏
                Constraint::Length(3), // 加载按钮
                Constraint::Min(1),    // 画廊
                Constraint::Length(1), // 状态栏
            ])
            .split(area);

        Self {
            title: rows[0],
            trigger: trigger_button_area(rows[1]),
            gallery: rows[2],
            status: rows[3],
        }
    }

    /// 画廊边框内的卡片列表区域
    pub fn card_list(&self) -> Rect {
        inner(self.gallery)
    }
}

/// 去掉一圈边框
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// 加载按钮：左对齐，宽度固定
fn trigger_button_area(row: Rect) -> Rect {
    Rect::new(row.x + 1, row.y, row.width.saturating_sub(2).min(28), row.height)
}

/// 可同时显示的卡片数量（至少 1）
pub fn card_slots(viewport: Rect) -> usize {
    let list = AppLayout::compute(viewport).card_list();
    // 最后一张卡片不需要间隔行
    usize::from(((list.height + 1) / CARD_HEIGHT).max(1))
}

/// 第 `slot` 个可见卡片的区域（不含间隔行）
pub fn card_rect(list: Rect, slot: usize) -> Option<Rect> {
    let offset = u16::try_from(slot).ok()?.checked_mul(CARD_HEIGHT)?;
    if offset >= list.height {
        return None;
    }
    let height = (CARD_HEIGHT - 1).min(list.height - offset);
    Some(Rect::new(list.x, list.y + offset, list.width, height))
}

/// 计算居中区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 点 (column, row) 是否落在区域内
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
