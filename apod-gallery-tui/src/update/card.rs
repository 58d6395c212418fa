//! 卡片更新逻辑

use apod_gallery_core::{CardActivation, FocusTarget};

use crate::message::CardMessage;
use crate::model::App;

/// 处理卡片消息
pub fn update(app: &mut App, msg: CardMessage) {
    match msg {
        CardMessage::Activate { id, activation } => {
            let Some(entry) = app.gallery.loader.activate_card(id, activation) else {
                return;
            };

            // 点击会先让卡片获得焦点，关闭弹窗后焦点回到这里
            if activation == CardActivation::Click {
                app.focus.focus(FocusTarget::Card(id));
            }
            app.modal.open(&entry, &mut app.focus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, ModalMessage};
    use crate::update::test_support::load_entries;
    use crate::update::update as update_app;
    use apod_gallery_core::{ActivationKey, ModalKey, ModalMedia};

    #[test]
    fn test_enter_opens_modal_and_escape_restores_focus() {
        let mut app = App::default();
        load_entries(&mut app, &["Andromeda", "Orion"]);
        let id = app.gallery.loader.cards()[1].id;
        app.focus.focus(FocusTarget::Card(id));

        update(
            &mut app,
            CardMessage::Activate {
                id,
                activation: CardActivation::Key(ActivationKey::Enter),
            },
        );
        assert!(app.modal.is_open());
        assert_eq!(app.modal.view().title, "Orion");
        assert_eq!(app.focus.current(), FocusTarget::ModalClose);

        update_app(&mut app, AppMessage::Modal(ModalMessage::Key(ModalKey::Escape)));
        assert!(!app.modal.is_open());
        assert_eq!(app.focus.current(), FocusTarget::Card(id));
    }

    #[test]
    fn test_click_focuses_card_before_opening() {
        let mut app = App::default();
        load_entries(&mut app, &["Andromeda"]);
        let id = app.gallery.loader.cards()[0].id;

        update(
            &mut app,
            CardMessage::Activate {
                id,
                activation: CardActivation::Click,
            },
        );
        assert_eq!(app.modal.last_active(), Some(FocusTarget::Card(id)));
        assert!(matches!(
            app.modal.view().media,
            Some(ModalMedia::Image { ref alt, .. }) if alt == "Andromeda"
        ));
    }

    #[test]
    fn test_other_key_does_nothing() {
        let mut app = App::default();
        load_entries(&mut app, &["Andromeda"]);
        let id = app.gallery.loader.cards()[0].id;

        update(
            &mut app,
            CardMessage::Activate {
                id,
                activation: CardActivation::Key(ActivationKey::Other),
            },
        );
        assert!(!app.modal.is_open());
    }
}
