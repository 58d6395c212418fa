//! Detail Modal Controller.
//!
//! Two states, `Closed` and `Open`. Three close triggers (close control,
//! backdrop click, Escape) all end in [`ModalController::close`], so focus
//! restoration and listener teardown happen on every path.

use crate::focus::{FocusScope, FocusState, FocusTarget};
use crate::gallery::VIDEO_ALLOW;
use crate::types::{ApodEntry, MediaKind};

/// Alt text used when the entry has no title.
pub const FALLBACK_ALT: &str = "APOD image";
/// Label of the link shown for unrecognised media.
pub const FALLBACK_LINK_LABEL: &str = "Open media";

/// Media slot content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMedia {
    Image {
        src: String,
        alt: String,
    },
    Video {
        src: String,
        allow: &'static str,
        allow_fullscreen: bool,
    },
    /// Plain link opening the media in a new browsing context.
    Link {
        href: String,
        label: &'static str,
        new_context: bool,
    },
}

impl ModalMedia {
    pub fn for_entry(entry: &ApodEntry) -> Self {
        match entry.media_kind() {
            MediaKind::Image => Self::Image {
                src: entry.url.clone(),
                alt: if entry.title.is_empty() {
                    FALLBACK_ALT.to_string()
                } else {
                    entry.title.clone()
                },
            },
            MediaKind::Video => Self::Video {
                src: entry.url.clone(),
                allow: VIDEO_ALLOW,
                allow_fullscreen: true,
            },
            MediaKind::Other(_) => Self::Link {
                href: if entry.url.is_empty() {
                    "#".to_string()
                } else {
                    entry.url.clone()
                },
                label: FALLBACK_LINK_LABEL,
                new_context: true,
            },
        }
    }
}

/// Everything the modal regions display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    /// `"Date: {date}"`, or empty when the entry has no date.
    pub date_line: String,
    pub explanation: String,
    pub media: Option<ModalMedia>,
    pub aria_hidden: bool,
}

impl Default for ModalView {
    fn default() -> Self {
        Self {
            title: String::new(),
            date_line: String::new(),
            explanation: String::new(),
            media: None,
            aria_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
}

/// Key delivered to the document-level listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Other,
}

/// Where a pointer activation landed while the modal was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The overlay itself, outside the content box
    Backdrop,
    /// Anything inside the content box
    Content,
}

/// Detail Modal Controller.
#[derive(Debug)]
pub struct ModalController {
    attached: bool,
    phase: ModalPhase,
    view: ModalView,
    last_active: Option<FocusTarget>,
    escape_listener: bool,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    /// Controller bound to a modal root.
    pub fn new() -> Self {
        Self {
            attached: true,
            phase: ModalPhase::Closed,
            view: ModalView::default(),
            last_active: None,
            escape_listener: false,
        }
    }

    /// Controller for a host without a modal root; every operation is a no-op.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new()
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn view(&self) -> &ModalView {
        &self.view
    }

    pub fn escape_listener_installed(&self) -> bool {
        self.escape_listener
    }

    /// Element that will get focus back on close.
    pub fn last_active(&self) -> Option<FocusTarget> {
        self.last_active
    }

    /// Show `entry`. Calling it again while open repopulates the regions and
    /// keeps the focus target recorded by the first open.
    pub fn open(&mut self, entry: &ApodEntry, focus: &mut FocusState) {
        if !self.attached {
            return;
        }

        if self.phase == ModalPhase::Closed {
            self.last_active = Some(focus.current());
        }

        self.view.media = None;
        self.view.title.clone_from(&entry.title);
        self.view.date_line = if entry.date.is_empty() {
            String::new()
        } else {
            entry.date_line()
        };
        self.view.explanation.clone_from(&entry.explanation);
        self.view.media = Some(ModalMedia::for_entry(entry));
        self.view.aria_hidden = false;

        focus.focus(FocusTarget::ModalClose);
        self.escape_listener = true;
        self.phase = ModalPhase::Open;
        log::debug!("[modal] opened \"{}\"", entry.title);
    }

    /// Hide the modal and hand focus back to the element that opened it, when
    /// that element can still take focus. Otherwise focus falls back to the page.
    pub fn close(&mut self, focus: &mut FocusState, scope: &dyn FocusScope) {
        if !self.attached {
            return;
        }

        self.view.aria_hidden = true;
        self.view.media = None;
        self.escape_listener = false;
        self.phase = ModalPhase::Closed;

        match self.last_active.take() {
            Some(target) if scope.can_focus(&target) => focus.focus(target),
            Some(_) => focus.blur(),
            None => {}
        }
        log::debug!("[modal] closed, focus on {:?}", focus.current());
    }

    /// Close control activation.
    pub fn activate_close(&mut self, focus: &mut FocusState, scope: &dyn FocusScope) {
        self.close(focus, scope);
    }

    /// Document-level key listener. Returns `true` when the key closed the modal.
    pub fn handle_key(
        &mut self,
        key: ModalKey,
        focus: &mut FocusState,
        scope: &dyn FocusScope,
    ) -> bool {
        if !self.escape_listener || key != ModalKey::Escape {
            return false;
        }
        self.close(focus, scope);
        true
    }

    /// Pointer activation on the overlay. Only a hit on the backdrop closes.
    pub fn handle_pointer(
        &mut self,
        target: PointerTarget,
        focus: &mut FocusState,
        scope: &dyn FocusScope,
    ) -> bool {
        if !self.is_open() || target != PointerTarget::Backdrop {
            return false;
        }
        self.close(focus, scope);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryLoader;
    use crate::test_utils::{entry, sample_entries};
    use crate::types::FeedPayload;

    fn loaded_gallery() -> GalleryLoader {
        let mut loader = GalleryLoader::new();
        let ticket = loader.begin_load();
        loader.finish_load(ticket, Ok(FeedPayload::Entries(sample_entries())));
        loader
    }

    /// 从卡片打开弹窗，返回 (controller, focus, 卡片目标)
    fn open_from_card(
        loader: &GalleryLoader,
        index: usize,
    ) -> (ModalController, FocusState, FocusTarget) {
        let id = loader.cards()[index].id;
        let card = FocusTarget::Card(id);
        let mut focus = FocusState::new();
        focus.focus(card);

        let mut modal = ModalController::new();
        let snapshot = loader.card_entry(id).unwrap().clone();
        modal.open(&snapshot, &mut focus);
        (modal, focus, card)
    }

    #[test]
    fn test_open_populates_regions() {
        let loader = loaded_gallery();
        let (modal, focus, card) = open_from_card(&loader, 0);

        assert!(modal.is_open());
        assert!(!modal.view().aria_hidden);
        assert_eq!(modal.view().title, "Andromeda");
        assert_eq!(modal.view().date_line, "Date: 2024-01-01");
        assert_eq!(modal.view().explanation, "About Andromeda");
        assert_eq!(
            modal.view().media,
            Some(ModalMedia::Image {
                src: "https://apod.nasa.gov/m31.jpg".to_string(),
                alt: "Andromeda".to_string(),
            })
        );
        assert_eq!(focus.current(), FocusTarget::ModalClose);
        assert_eq!(modal.last_active(), Some(card));
        assert!(modal.escape_listener_installed());
    }

    #[test]
    fn test_close_control_restores_focus_to_card() {
        let loader = loaded_gallery();
        let (mut modal, mut focus, card) = open_from_card(&loader, 1);

        modal.activate_close(&mut focus, &loader);

        assert_eq!(focus.current(), card);
        assert!(modal.view().aria_hidden);
        assert_eq!(modal.view().media, None);
        assert!(!modal.escape_listener_installed());
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_escape_closes_and_restores_focus() {
        let loader = loaded_gallery();
        let (mut modal, mut focus, card) = open_from_card(&loader, 0);

        assert!(!modal.handle_key(ModalKey::Other, &mut focus, &loader));
        assert!(modal.is_open());

        assert!(modal.handle_key(ModalKey::Escape, &mut focus, &loader));
        assert_eq!(focus.current(), card);
        assert!(modal.view().aria_hidden);
        assert_eq!(modal.view().media, None);
    }

    #[test]
    fn test_backdrop_click_closes_content_click_does_not() {
        let loader = loaded_gallery();
        let (mut modal, mut focus, card) = open_from_card(&loader, 2);

        assert!(!modal.handle_pointer(PointerTarget::Content, &mut focus, &loader));
        assert!(modal.is_open());
        assert_eq!(focus.current(), FocusTarget::ModalClose);

        assert!(modal.handle_pointer(PointerTarget::Backdrop, &mut focus, &loader));
        assert_eq!(focus.current(), card);
        assert!(modal.view().aria_hidden);
        assert_eq!(modal.view().media, None);
    }

    #[test]
    fn test_escape_ignored_after_close() {
        let loader = loaded_gallery();
        let (mut modal, mut focus, _) = open_from_card(&loader, 0);
        modal.activate_close(&mut focus, &loader);

        focus.focus(FocusTarget::Trigger);
        assert!(!modal.handle_key(ModalKey::Escape, &mut focus, &loader));
        assert_eq!(focus.current(), FocusTarget::Trigger);
    }

    #[test]
    fn test_focus_falls_back_when_card_is_gone() {
        let mut loader = loaded_gallery();
        let (mut modal, mut focus, _) = open_from_card(&loader, 0);

        // 弹窗打开期间画廊被重新渲染，原卡片已不存在
        let ticket = loader.begin_load();
        loader.finish_load(ticket, Ok(FeedPayload::Entries(sample_entries())));

        modal.activate_close(&mut focus, &loader);
        assert_eq!(focus.current(), FocusTarget::Page);
    }

    #[test]
    fn test_reopen_keeps_first_focus_target() {
        let loader = loaded_gallery();
        let (mut modal, mut focus, card) = open_from_card(&loader, 0);

        let video = loader.card_entry(loader.cards()[1].id).unwrap().clone();
        modal.open(&video, &mut focus);

        assert_eq!(modal.view().title, "Launch Replay");
        assert!(matches!(modal.view().media, Some(ModalMedia::Video { .. })));
        assert_eq!(modal.last_active(), Some(card));

        modal.activate_close(&mut focus, &loader);
        assert_eq!(focus.current(), card);
    }

    #[test]
    fn test_unrecognised_media_renders_link() {
        let mut focus = FocusState::new();
        let mut modal = ModalController::new();

        modal.open(&entry("Sky Map", "other", "https://apod.nasa.gov/map.html"), &mut focus);
        assert_eq!(
            modal.view().media,
            Some(ModalMedia::Link {
                href: "https://apod.nasa.gov/map.html".to_string(),
                label: FALLBACK_LINK_LABEL,
                new_context: true,
            })
        );

        modal.open(&entry("Sky Map", "", ""), &mut focus);
        assert!(matches!(
            modal.view().media,
            Some(ModalMedia::Link { ref href, .. }) if href == "#"
        ));
    }

    #[test]
    fn test_missing_date_and_title() {
        let mut focus = FocusState::new();
        let mut modal = ModalController::new();
        let entry = ApodEntry {
            media_type: "image".to_string(),
            url: "https://apod.nasa.gov/x.jpg".to_string(),
            ..ApodEntry::default()
        };

        modal.open(&entry, &mut focus);
        assert_eq!(modal.view().date_line, "");
        assert!(matches!(
            modal.view().media,
            Some(ModalMedia::Image { ref alt, .. }) if alt == FALLBACK_ALT
        ));
    }

    #[test]
    fn test_detached_controller_is_noop() {
        let loader = loaded_gallery();
        let mut focus = FocusState::new();
        focus.focus(FocusTarget::Trigger);
        let mut modal = ModalController::detached();

        modal.open(&sample_entries()[0], &mut focus);
        assert!(!modal.is_open());
        assert!(modal.view().aria_hidden);
        assert_eq!(focus.current(), FocusTarget::Trigger);

        assert!(!modal.handle_key(ModalKey::Escape, &mut focus, &loader));
    }
}
