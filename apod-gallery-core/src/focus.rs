//! Keyboard focus model.
//!
//! The gallery and the modal never hold references to each other's elements.
//! Focus is expressed as a [`FocusTarget`] value, and whether a target can
//! still take focus is answered by whoever owns it through [`FocusScope`].

use std::fmt;

use uuid::Uuid;

/// Identity of one rendered gallery card.
///
/// Freshly generated on every render, so a card from an earlier render never
/// compares equal to a card of the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0.simple())
    }
}

/// Anything that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusTarget {
    /// Nothing in particular (the page body)
    #[default]
    Page,
    /// The load trigger control
    Trigger,
    /// One gallery card
    Card(CardId),
    /// The modal's close control
    ModalClose,
}

/// Answers whether a target still exists and accepts focus.
pub trait FocusScope {
    fn can_focus(&self, target: &FocusTarget) -> bool;
}

/// The currently focused target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    current: FocusTarget,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    pub fn focus(&mut self, target: FocusTarget) {
        self.current = target;
    }

    /// Drop focus back to the page.
    pub fn blur(&mut self) {
        self.current = FocusTarget::Page;
    }

    pub fn is(&self, target: &FocusTarget) -> bool {
        self.current == *target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_are_unique() {
        assert_ne!(CardId::new(), CardId::new());
    }

    #[test]
    fn test_focus_and_blur() {
        let mut focus = FocusState::new();
        assert_eq!(focus.current(), FocusTarget::Page);

        focus.focus(FocusTarget::Trigger);
        assert!(focus.is(&FocusTarget::Trigger));

        focus.blur();
        assert_eq!(focus.current(), FocusTarget::Page);
    }

    #[test]
    fn test_card_id_display() {
        let id = CardId::new();
        assert!(id.to_string().starts_with("card-"));
    }
}
