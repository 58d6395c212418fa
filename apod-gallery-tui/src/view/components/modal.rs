//! 详情弹窗组件

use apod_gallery_core::{FocusTarget, ModalMedia};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::centered_rect;
use crate::view::theme::Styles;

const MAX_WIDTH: u16 = 76;
const MAX_HEIGHT: u16 = 22;
const CLOSE_BUTTON_WIDTH: u16 = 11;

/// 弹窗内容框的位置（遮罩层之外的部分点击会关闭弹窗）
pub fn modal_area(viewport: Rect) -> Rect {
    let width = viewport.width.saturating_sub(8).min(MAX_WIDTH);
    let height = viewport.height.saturating_sub(4).min(MAX_HEIGHT);
    centered_rect(width, height, viewport)
}

/// 关闭按钮：内容框最后一行的右侧
pub fn close_button_area(modal: Rect) -> Rect {
    let width = CLOSE_BUTTON_WIDTH.min(modal.width.saturating_sub(2));
    Rect::new(
        modal.x + modal.width.saturating_sub(width + 2),
        modal.y + modal.height.saturating_sub(2),
        width,
        1,
    )
}

/// 渲染弹窗（如果已打开）
pub fn render(app: &App, frame: &mut Frame) {
    if !app.modal.is_open() {
        return;
    }
    let texts = t();
    let view = app.modal.view();

    // 遮罩层：整个屏幕变暗
    let viewport = frame.area();
    frame
        .buffer_mut()
        .set_style(viewport, Style::default().add_modifier(Modifier::DIM));

    let area = modal_area(viewport);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", view.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::heading())
        .borders(Borders::ALL)
        .border_style(Styles::frame(true))
        .style(Styles::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if !view.date_line.is_empty() {
        lines.push(Line::styled(view.date_line.clone(), Styles::faint()));
        lines.push(Line::from(""));
    }

    match &view.media {
        Some(ModalMedia::Image { src, alt }) => {
            lines.push(Line::from(vec![
                Span::styled(format!("🖼  {}: ", texts.modal.image), Styles::badge()),
                Span::raw(alt.clone()),
            ]));
            lines.push(Line::styled(format!("   {src}"), Styles::link()));
        }
        Some(ModalMedia::Video { src, .. }) => {
            lines.push(Line::from(vec![
                Span::styled(format!("▶  {}: ", texts.modal.video), Styles::badge()),
                Span::styled(src.clone(), Styles::link()),
            ]));
        }
        Some(ModalMedia::Link { href, .. }) => {
            lines.push(Line::from(vec![
                Span::styled(format!("↗  {}: ", texts.modal.open_media), Styles::badge()),
                Span::styled(
                    href.clone(),
                    Styles::link().add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        None => {}
    }
    lines.push(Line::from(""));
    lines.push(Line::from(view.explanation.clone()));

    // 留出最后一行给关闭按钮
    let body = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

    let close = Paragraph::new(format!("[ {} ]", texts.modal.close_button))
        .alignment(Alignment::Center)
        .style(Styles::control(app.focus.is(&FocusTarget::ModalClose)));
    frame.render_widget(close, close_button_area(area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_area_is_centered() {
        let area = modal_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(12, 9, 76, 22));
    }

    #[test]
    fn test_close_button_inside_modal() {
        let modal = Rect::new(12, 9, 76, 22);
        let button = close_button_area(modal);
        assert_eq!(button, Rect::new(75, 29, 11, 1));
        assert!(button.x + button.width < modal.x + modal.width);
        assert!(button.y < modal.y + modal.height - 1);
    }
}
