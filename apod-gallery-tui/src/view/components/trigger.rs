//! 加载按钮组件

use apod_gallery_core::FocusTarget;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染加载按钮（请求进行中时变暗）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(trigger) = app.gallery.loader.trigger() else {
        return;
    };
    let texts = t();

    let focused = app.focus.is(&FocusTarget::Trigger);
    let (label, label_style, border_style) = if trigger.disabled {
        (texts.trigger.busy, Styles::faint(), Styles::faint())
    } else {
        (
            texts.trigger.label,
            Styles::control(focused),
            Styles::frame(focused),
        )
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(label_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}
