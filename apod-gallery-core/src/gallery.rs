//! Gallery Loader.
//!
//! Owns the gallery container and the load trigger. A load runs in two halves
//! around the single network await:
//!
//! ```text
//! activate_trigger() / begin_load()   container → Loading, trigger disabled
//!            │
//!        feed.fetch().await
//!            │
//! finish_load(ticket, result)         container → Cards | Empty | Error
//!                                     trigger re-enabled (always)
//! ```
//!
//! Front ends that cannot hold `&mut GalleryLoader` across an await (an event
//! loop handing the fetch to a task) call the two halves themselves. Everyone
//! else uses [`GalleryLoader::load`].

use std::collections::HashMap;

use crate::error::GalleryResult;
use crate::feed::ApodFeed;
use crate::focus::{CardId, FocusScope, FocusTarget};
use crate::types::{ApodEntry, FeedPayload, MediaKind};

/// Status text shown while the request is in flight.
pub const LOADING_MESSAGE: &str = "🔄 Loading space photos…";
/// Shown for an empty or non-array payload.
pub const EMPTY_MESSAGE: &str = "No images available.";
/// Shown for any transport or parse failure. Never carries error detail.
pub const ERROR_MESSAGE: &str = "Error fetching APOD data. Check the console for details.";

pub const VIDEO_WIDTH: u32 = 560;
pub const VIDEO_HEIGHT: u32 = 315;
/// Capabilities granted to embedded video frames.
pub const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Accessibility role of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Announced as activatable
    Button,
    /// Status region
    Status,
}

/// Live-region politeness of a status element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveRegion {
    Polite,
}

/// Media element of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    Image {
        src: String,
        alt: String,
    },
    Video {
        src: String,
        width: u32,
        height: u32,
        allow: &'static str,
        allow_fullscreen: bool,
        frame_border: u32,
    },
}

impl CardMedia {
    /// Media element for an entry, or `None` when the media type is unrecognised.
    pub fn for_entry(entry: &ApodEntry) -> Option<Self> {
        match entry.media_kind() {
            MediaKind::Image => Some(Self::Image {
                src: entry.url.clone(),
                alt: entry.title.clone(),
            }),
            MediaKind::Video => Some(Self::Video {
                src: entry.url.clone(),
                width: VIDEO_WIDTH,
                height: VIDEO_HEIGHT,
                allow: VIDEO_ALLOW,
                allow_fullscreen: true,
                frame_border: 0,
            }),
            MediaKind::Other(_) => None,
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Self::Image { src, .. } | Self::Video { src, .. } => src,
        }
    }

    /// Style class, kept for hosts that style by class name.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Image { .. } => "apod-image",
            Self::Video { .. } => "apod-video",
        }
    }
}

/// One rendered card. Display fields only; the entry snapshot lives in the
/// loader's card map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    pub id: CardId,
    pub title: String,
    pub date_line: String,
    pub media: Option<CardMedia>,
    pub explanation: String,
    /// Always 0: the card sits in the natural tab order.
    pub tab_index: i32,
    pub role: Role,
}

impl GalleryCard {
    pub fn render(entry: &ApodEntry) -> Self {
        Self {
            id: CardId::new(),
            title: entry.title.clone(),
            date_line: entry.date_line(),
            media: CardMedia::for_entry(entry),
            explanation: entry.explanation.clone(),
            tab_index: 0,
            role: Role::Button,
        }
    }
}

/// Contents of the gallery container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryView {
    /// Nothing loaded yet
    #[default]
    Idle,
    Loading {
        message: &'static str,
        role: Role,
        live: LiveRegion,
    },
    Empty {
        message: &'static str,
    },
    Error {
        message: &'static str,
    },
    Cards(Vec<GalleryCard>),
}

impl GalleryView {
    fn loading() -> Self {
        Self::Loading {
            message: LOADING_MESSAGE,
            role: Role::Status,
            live: LiveRegion::Polite,
        }
    }

    /// User-visible message, if the container shows one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading { message, .. } | Self::Empty { message } | Self::Error { message } => {
                Some(message)
            }
            Self::Idle | Self::Cards(_) => None,
        }
    }
}

/// The load trigger control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerControl {
    pub disabled: bool,
}

/// Proof that [`GalleryLoader::begin_load`] ran; consumed by
/// [`GalleryLoader::finish_load`].
#[must_use = "a started load must be finished to re-enable the trigger"]
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Key that reached a focused card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
    Other,
}

/// How a card was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActivation {
    Click,
    Key(ActivationKey),
}

/// Gallery Loader state.
#[derive(Debug, Default)]
pub struct GalleryLoader {
    view: GalleryView,
    entries: HashMap<CardId, ApodEntry>,
    trigger: Option<TriggerControl>,
    next_seq: u64,
    in_flight: usize,
}

impl GalleryLoader {
    /// Loader wired to a trigger control.
    pub fn new() -> Self {
        Self {
            trigger: Some(TriggerControl::default()),
            ..Self::default()
        }
    }

    /// Loader for a host without a trigger control. Loads can still be started
    /// with [`begin_load`](Self::begin_load) or [`load`](Self::load).
    pub fn without_trigger() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn trigger(&self) -> Option<&TriggerControl> {
        self.trigger.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Rendered cards in display order; empty unless the view shows cards.
    pub fn cards(&self) -> &[GalleryCard] {
        match &self.view {
            GalleryView::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn card_index(&self, id: CardId) -> Option<usize> {
        self.cards().iter().position(|card| card.id == id)
    }

    /// Entry snapshot captured for a rendered card.
    pub fn card_entry(&self, id: CardId) -> Option<&ApodEntry> {
        self.entries.get(&id)
    }

    /// User activation of the trigger. `None` when there is no trigger or it is
    /// disabled because a load is already in flight.
    pub fn activate_trigger(&mut self) -> Option<LoadTicket> {
        match self.trigger {
            Some(TriggerControl { disabled: false }) => Some(self.begin_load()),
            _ => None,
        }
    }

    /// Clear the container, show the loading status and disable the trigger.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.entries.clear();
        self.view = GalleryView::loading();
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.disabled = true;
        }

        self.next_seq += 1;
        self.in_flight += 1;
        log::debug!("[gallery] load #{} started", self.next_seq);
        LoadTicket { seq: self.next_seq }
    }

    /// Replace the container with the outcome and re-enable the trigger.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: GalleryResult<FeedPayload>) {
        self.entries.clear();

        self.view = match result {
            Ok(FeedPayload::Entries(entries)) => {
                let cards = entries
                    .into_iter()
                    .map(|entry| {
                        let card = GalleryCard::render(&entry);
                        self.entries.insert(card.id, entry);
                        card
                    })
                    .collect::<Vec<_>>();
                log::info!("[gallery] load #{} rendered {} cards", ticket.seq, cards.len());
                GalleryView::Cards(cards)
            }
            Ok(FeedPayload::Empty) => GalleryView::Empty {
                message: EMPTY_MESSAGE,
            },
            Err(err) => {
                log::error!("Error fetching APOD data: {err}");
                GalleryView::Error {
                    message: ERROR_MESSAGE,
                }
            }
        };

        self.in_flight = self.in_flight.saturating_sub(1);
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.disabled = false;
        }
    }

    /// Full load cycle against `feed`. Never fails: every error ends up in the
    /// container as [`ERROR_MESSAGE`] and in the diagnostic log.
    pub async fn load(&mut self, feed: &dyn ApodFeed) {
        let ticket = self.begin_load();
        let result = feed.fetch().await;
        self.finish_load(ticket, result);
    }

    /// Trigger activation followed by a full load. Returns `false` when the
    /// trigger ignored the activation.
    pub async fn load_from_trigger(&mut self, feed: &dyn ApodFeed) -> bool {
        let Some(ticket) = self.activate_trigger() else {
            return false;
        };
        let result = feed.fetch().await;
        self.finish_load(ticket, result);
        true
    }

    /// Activation of a rendered card. Returns the entry snapshot to open in the
    /// modal for a click, Enter or Space.
    pub fn activate_card(&self, id: CardId, activation: CardActivation) -> Option<ApodEntry> {
        match activation {
            CardActivation::Click
            | CardActivation::Key(ActivationKey::Enter | ActivationKey::Space) => {
                self.card_entry(id).cloned()
            }
            CardActivation::Key(ActivationKey::Other) => None,
        }
    }
}

impl FocusScope for GalleryLoader {
    fn can_focus(&self, target: &FocusTarget) -> bool {
        match target {
            FocusTarget::Page => true,
            FocusTarget::Trigger => self.trigger.is_some_and(|t| !t.disabled),
            FocusTarget::Card(id) => self.entries.contains_key(id),
            FocusTarget::ModalClose => false,
        }
    }
}
