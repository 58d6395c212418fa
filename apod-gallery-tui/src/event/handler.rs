//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use apod_gallery_core::{ActivationKey, CardActivation, FocusTarget, ModalKey, PointerTarget};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CardMessage, ModalMessage};
use crate::model::App;
use crate::view::components::modal::{close_button_area, modal_area};
use crate::view::layout::{card_rect, contains, AppLayout};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }

    if DefaultKeymap::LOAD.matches(&key) {
        return AppMessage::LoadGallery;
    }

    // Tab / Shift+Tab: 移动焦点
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // 部分终端发送的 BackTab 不带 SHIFT
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    // ↑ 或 k / ↓ 或 j: 选择卡片
    if DefaultKeymap::SELECT_UP.matches(&key) || key.code == KeyCode::Char('k') {
        return AppMessage::SelectPrev;
    }
    if DefaultKeymap::SELECT_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        return AppMessage::SelectNext;
    }

    if DefaultKeymap::ACTIVATE.matches(&key) {
        return activate_focused(app, ActivationKey::Enter);
    }
    if DefaultKeymap::ACTIVATE_ALT.matches(&key) {
        return activate_focused(app, ActivationKey::Space);
    }

    AppMessage::Noop
}

/// Enter / Space 作用于当前焦点
fn activate_focused(app: &App, key: ActivationKey) -> AppMessage {
    match app.focus.current() {
        FocusTarget::Trigger => AppMessage::LoadGallery,
        FocusTarget::Card(id) => AppMessage::Card(CardMessage::Activate {
            id,
            activation: CardActivation::Key(key),
        }),
        FocusTarget::Page | FocusTarget::ModalClose => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Key(ModalKey::Escape));
    }

    let on_close_button = app.focus.is(&FocusTarget::ModalClose);
    if on_close_button
        && (DefaultKeymap::ACTIVATE.matches(&key) || DefaultKeymap::ACTIVATE_ALT.matches(&key))
    {
        return AppMessage::Modal(ModalMessage::CloseControl);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    AppMessage::Modal(ModalMessage::Key(ModalKey::Other))
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(mouse.column, mouse.row, app),
        MouseEventKind::ScrollDown if !app.modal.is_open() => AppMessage::SelectNext,
        MouseEventKind::ScrollUp if !app.modal.is_open() => AppMessage::SelectPrev,
        _ => AppMessage::Noop,
    }
}

/// 鼠标左键点击：与绘制时使用同一套布局做命中测试
fn handle_click(column: u16, row: u16, app: &App) -> AppMessage {
    if app.modal.is_open() {
        let area = modal_area(app.viewport);
        if contains(close_button_area(area), column, row) {
            return AppMessage::Modal(ModalMessage::CloseControl);
        }
        let target = if contains(area, column, row) {
            PointerTarget::Content
        } else {
            PointerTarget::Backdrop
        };
        return AppMessage::Modal(ModalMessage::Pointer(target));
    }

    let layout = AppLayout::compute(app.viewport);
    if contains(layout.trigger, column, row) {
        return AppMessage::LoadGallery;
    }

    let list = layout.card_list();
    let cards = app.gallery.loader.cards().iter().skip(app.gallery.scroll);
    for (slot, card) in cards.enumerate() {
        let Some(rect) = card_rect(list, slot) else {
            break;
        };
        if contains(rect, column, row) {
            return AppMessage::Card(CardMessage::Activate {
                id: card.id,
                activation: CardActivation::Click,
            });
        }
    }

    AppMessage::Noop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support::load_entries;
    use crate::update::update;
    use crossterm::event::{KeyModifiers, KeyEventState};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// 加载两张卡片并从第一张打开弹窗
    fn app_with_open_modal() -> App {
        let mut app = App::default();
        load_entries(&mut app, &["Andromeda", "Orion"]);
        let msg = handle_event(click(10, 6), &app);
        update(&mut app, msg);
        assert!(app.modal.is_open());
        app
    }

    #[test]
    fn test_global_keys() {
        let app = App::default();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        assert!(matches!(
            handle_event(press(KeyCode::Char('f')), &app),
            AppMessage::LoadGallery
        ));
        assert!(matches!(handle_event(press(KeyCode::Tab), &app), AppMessage::FocusNext));
        assert!(matches!(
            handle_event(Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)), &app),
            AppMessage::FocusPrev
        ));
        assert!(matches!(
            handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                &app
            ),
            AppMessage::Quit
        ));
    }

    #[test]
    fn test_release_events_ignored() {
        let app = App::default();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(handle_event(Event::Key(release), &app), AppMessage::Noop));
    }

    #[test]
    fn test_enter_on_trigger_loads() {
        let mut app = App::default();
        app.focus.focus(FocusTarget::Trigger);
        assert!(matches!(handle_event(press(KeyCode::Enter), &app), AppMessage::LoadGallery));
    }

    #[test]
    fn test_space_on_card_activates() {
        let mut app = App::default();
        load_entries(&mut app, &["Andromeda"]);
        let id = app.gallery.loader.cards()[0].id;
        app.focus.focus(FocusTarget::Card(id));

        let msg = handle_event(press(KeyCode::Char(' ')), &app);
        assert!(matches!(
            msg,
            AppMessage::Card(CardMessage::Activate {
                id: got,
                activation: CardActivation::Key(ActivationKey::Space),
            }) if got == id
        ));
    }

    #[test]
    fn test_click_trigger_and_card() {
        let mut app = App::default();
        load_entries(&mut app, &["Andromeda", "Orion"]);
        let second = app.gallery.loader.cards()[1].id;

        assert!(matches!(handle_event(click(5, 2), &app), AppMessage::LoadGallery));
        assert!(matches!(
            handle_event(click(10, 12), &app),
            AppMessage::Card(CardMessage::Activate {
                id,
                activation: CardActivation::Click,
            }) if id == second
        ));
        // 卡片之间的间隔行
        assert!(matches!(handle_event(click(10, 10), &app), AppMessage::Noop));
    }

    #[test]
    fn test_modal_keys() {
        let app = app_with_open_modal();

        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Key(ModalKey::Escape))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::CloseControl)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Modal(ModalMessage::Key(ModalKey::Other))
        ));
    }

    #[test]
    fn test_modal_clicks() {
        let app = app_with_open_modal();

        // 80x24 下内容框为 (4, 2, 72, 20)，关闭按钮在 (63, 20)
        assert!(matches!(
            handle_event(click(65, 20), &app),
            AppMessage::Modal(ModalMessage::CloseControl)
        ));
        assert!(matches!(
            handle_event(click(10, 10), &app),
            AppMessage::Modal(ModalMessage::Pointer(PointerTarget::Content))
        ));
        assert!(matches!(
            handle_event(click(1, 0), &app),
            AppMessage::Modal(ModalMessage::Pointer(PointerTarget::Backdrop))
        ));
    }

    #[test]
    fn test_backdrop_click_restores_card_focus() {
        let mut app = app_with_open_modal();
        let first = app.gallery.loader.cards()[0].id;

        let msg = handle_event(click(1, 0), &app);
        update(&mut app, msg);

        assert!(!app.modal.is_open());
        assert_eq!(app.focus.current(), FocusTarget::Card(first));
    }
}
