//! 画廊视图

use apod_gallery_core::{CardMedia, FocusTarget, GalleryCard, GalleryView};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::{card_rect, AppLayout};
use crate::view::theme::Styles;

/// 渲染画廊区域
pub fn render(app: &App, frame: &mut Frame, layout: &AppLayout) {
    let texts = t();

    let card_focused = matches!(app.focus.current(), FocusTarget::Card(_));
    let block = Block::default()
        .title(format!(" {} ", texts.gallery.title))
        .title_style(Styles::heading())
        .borders(Borders::ALL)
        .border_style(Styles::frame(card_focused));
    frame.render_widget(block, layout.gallery);

    let list = layout.card_list();
    match app.gallery.loader.view() {
        GalleryView::Idle => render_message(frame, list, texts.gallery.idle, Styles::faint()),
        // 状态区域：role=status, aria-live=polite
        GalleryView::Loading { .. } => {
            render_message(frame, list, texts.gallery.loading, Styles::loading());
        }
        GalleryView::Empty { .. } => {
            render_message(frame, list, texts.gallery.empty, Styles::empty());
        }
        GalleryView::Error { .. } => {
            render_message(frame, list, texts.gallery.error, Styles::error());
        }
        GalleryView::Cards(cards) => {
            for (slot, card) in cards.iter().skip(app.gallery.scroll).enumerate() {
                let Some(area) = card_rect(list, slot) else {
                    break;
                };
                let focused = app.focus.is(&FocusTarget::Card(card.id));
                render_card(frame, area, card, focused);
            }
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::styled(message.to_string(), style)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 渲染一张卡片：标题在边框上，首行为日期和媒体，其余行折行显示简介
fn render_card(frame: &mut Frame, area: Rect, card: &GalleryCard, focused: bool) {
    let texts = t();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.title),
            Styles::control(focused),
        ))
        .borders(Borders::ALL)
        .border_style(Styles::frame(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (badge, src) = match &card.media {
        Some(CardMedia::Image { src, .. }) => (texts.gallery.media_image, src.as_str()),
        Some(CardMedia::Video { src, .. }) => (texts.gallery.media_video, src.as_str()),
        None => (texts.gallery.media_none, ""),
    };

    let width = usize::from(inner.width);
    let badge = format!("  [{badge}] ");
    let src_width = width.saturating_sub(card.date_line.width() + badge.width());
    let mut lines = vec![Line::from(vec![
        Span::styled(card.date_line.clone(), Styles::faint()),
        Span::styled(badge, Styles::badge()),
        Span::styled(truncate_to_width(src, src_width), Styles::link()),
    ])];

    let explanation_rows = usize::from(inner.height).saturating_sub(1);
    lines.extend(
        wrap_to_width(&card.explanation, width, explanation_rows)
            .into_iter()
            .map(Line::from),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 按显示宽度截断，超出部分用 `…` 表示
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let text = text.lines().next().unwrap_or_default();
    if text.width() <= max_width {
        return text.to_string();
    }
    with_ellipsis(text, max_width)
}

/// 截取前缀并追加 `…`，总宽度不超过 `max_width`
fn with_ellipsis(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 按单词折行，最多 `max_lines` 行；放不下时最后一行以 `…` 结尾
fn wrap_to_width(text: &str, max_width: usize, max_lines: usize) -> Vec<String> {
    if max_width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let w = word.width();
        if used > 0 && used + 1 + w <= max_width {
            line.push(' ');
            line.push_str(word);
            used += 1 + w;
            continue;
        }
        if used > 0 {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        // 比一行还长的单词按字符硬折
        for ch in word.chars() {
            let cw = ch.width().unwrap_or(0);
            if used > 0 && used + cw > max_width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(ch);
            used += cw;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, max_width);
        }
    }
    lines
}
