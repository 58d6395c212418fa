//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

const SEPARATOR: &str = " │ ";

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据弹窗状态生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(SEPARATOR));
        }
        spans.push(Span::styled(*key, Styles::badge()));
        spans.push(Span::raw(" "));
        spans.push(Span::raw(*desc));
    }

    let status = match app.status_message {
        Some(ref msg) => msg.as_str(),
        None if app.gallery.loader.is_loading() => t().status_bar.loading,
        None => t().status_bar.ready,
    };
    spans.push(Span::raw(SEPARATOR));
    spans.push(Span::styled(status, Styles::status_text()));

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::banner());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Esc", texts.hints.close));
        hints.push(("Enter", texts.hints.close));
    } else {
        hints.push(("f", texts.hints.load));
        hints.push(("Tab", texts.hints.focus));
        if !app.gallery.loader.cards().is_empty() {
            hints.push(("↑↓", texts.hints.select));
            hints.push(("Enter", texts.hints.open));
        }
    }

    hints.push(("q", texts.common.quit));

    hints
}
