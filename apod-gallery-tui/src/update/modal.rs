//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let closed = match msg {
        ModalMessage::Key(key) => app.modal.handle_key(key, &mut app.focus, &app.gallery.loader),
        ModalMessage::Pointer(target) => {
            app.modal
                .handle_pointer(target, &mut app.focus, &app.gallery.loader)
        }
        ModalMessage::CloseControl => {
            let was_open = app.modal.is_open();
            app.modal.activate_close(&mut app.focus, &app.gallery.loader);
            was_open
        }
    };

    if closed {
        tracing::debug!("Modal closed, focus on {:?}", app.focus.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, CardMessage};
    use crate::update::test_support::load_entries;
    use crate::update::update as update_app;
    use apod_gallery_core::{
        ActivationKey, CardActivation, FeedPayload, FocusTarget, ModalKey, PointerTarget,
    };

    fn open_first(app: &mut App) -> FocusTarget {
        load_entries(app, &["Andromeda", "Orion"]);
        let id = app.gallery.loader.cards()[0].id;
        app.focus.focus(FocusTarget::Card(id));
        update_app(
            app,
            AppMessage::Card(CardMessage::Activate {
                id,
                activation: CardActivation::Key(ActivationKey::Space),
            }),
        );
        assert!(app.modal.is_open());
        FocusTarget::Card(id)
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut app = App::default();
        let card = open_first(&mut app);

        update(&mut app, ModalMessage::Pointer(PointerTarget::Backdrop));
        assert!(!app.modal.is_open());
        assert!(app.modal.view().aria_hidden);
        assert_eq!(app.focus.current(), card);
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let mut app = App::default();
        open_first(&mut app);

        update(&mut app, ModalMessage::Pointer(PointerTarget::Content));
        assert!(app.modal.is_open());
    }

    #[test]
    fn test_close_control() {
        let mut app = App::default();
        let card = open_first(&mut app);

        update(&mut app, ModalMessage::CloseControl);
        assert!(!app.modal.is_open());
        assert!(!app.modal.escape_listener_installed());
        assert_eq!(app.focus.current(), card);
    }

    #[test]
    fn test_other_key_keeps_modal_open() {
        let mut app = App::default();
        open_first(&mut app);

        update(&mut app, ModalMessage::Key(ModalKey::Other));
        assert!(app.modal.is_open());
    }

    #[test]
    fn test_focus_falls_back_when_card_was_rerendered() {
        let mut app = App::default();
        open_first(&mut app);

        // 弹窗打开期间画廊被重新渲染，原卡片已不存在
        let ticket = app.gallery.loader.begin_load();
        app.gallery
            .loader
            .finish_load(ticket, Ok(FeedPayload::Empty));

        update(&mut app, ModalMessage::Key(ModalKey::Escape));
        assert!(!app.modal.is_open());
        assert_eq!(app.focus.current(), FocusTarget::Page);
    }
}
