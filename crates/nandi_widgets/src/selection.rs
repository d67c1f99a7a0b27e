//! Hover and selection state for a group of cards
//!
//! One pointer, so one hovered card at a time (last enter wins, any leave
//! clears). Selection is an exclusive toggle: activating the selected card
//! clears it, activating another card moves the selection.

use nandi_core::Tracked;
use serde::Serialize;

/// Interaction events for a card group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEvent {
    PointerEnter(usize),
    PointerLeave,
    Activate(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardInteraction {
    pub hovered: Option<usize>,
    pub selected: Option<usize>,
}

impl CardInteraction {
    /// The state after applying one event
    pub fn apply(self, event: CardEvent) -> Self {
        match event {
            CardEvent::PointerEnter(index) => Self {
                hovered: Some(index),
                ..self
            },
            CardEvent::PointerLeave => Self {
                hovered: None,
                ..self
            },
            CardEvent::Activate(index) => Self {
                selected: if self.selected == Some(index) {
                    None
                } else {
                    Some(index)
                },
                ..self
            },
        }
    }

    pub fn emphasis(&self, index: usize) -> CardEmphasis {
        CardEmphasis {
            hovered: self.hovered == Some(index),
            selected: self.selected == Some(index),
        }
    }
}

/// Visual emphasis of a single card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardEmphasis {
    pub hovered: bool,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct HoverSelectionState {
    state: Tracked<CardInteraction>,
}

impl HoverSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_enter(&mut self, index: usize) -> CardInteraction {
        self.dispatch(CardEvent::PointerEnter(index))
    }

    pub fn on_pointer_leave(&mut self) -> CardInteraction {
        self.dispatch(CardEvent::PointerLeave)
    }

    pub fn on_activate(&mut self, index: usize) -> CardInteraction {
        self.dispatch(CardEvent::Activate(index))
    }

    /// Apply an event and return the new state
    pub fn dispatch(&mut self, event: CardEvent) -> CardInteraction {
        let next = self.state.get().apply(event);
        self.state.set(next);
        tracing::trace!(?event, hovered = ?next.hovered, selected = ?next.selected, "card event");
        next
    }

    pub fn hovered(&self) -> Option<usize> {
        self.state.get().hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.get().selected
    }

    pub fn emphasis(&self, index: usize) -> CardEmphasis {
        self.state.get().emphasis(index)
    }

    pub fn snapshot(&self) -> CardInteraction {
        *self.state.get()
    }

    pub fn writes(&self) -> u64 {
        self.state.writes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_last_write_wins() {
        let mut cards = HoverSelectionState::new();
        cards.on_pointer_enter(0);
        cards.on_pointer_enter(2);
        assert_eq!(cards.hovered(), Some(2));

        cards.on_pointer_leave();
        assert_eq!(cards.hovered(), None);
    }

    #[test]
    fn test_leave_clears_regardless_of_index() {
        let mut cards = HoverSelectionState::new();
        cards.on_pointer_enter(1);
        let state = cards.on_pointer_leave();
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_activate_twice_clears_selection() {
        for index in 0..4 {
            let mut cards = HoverSelectionState::new();
            cards.on_activate(index);
            assert_eq!(cards.selected(), Some(index));
            cards.on_activate(index);
            assert_eq!(cards.selected(), None);
        }
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut cards = HoverSelectionState::new();
        cards.on_activate(0);
        let state = cards.on_activate(2);
        assert_eq!(state.selected, Some(2));
        assert!(!cards.emphasis(0).selected);
        assert!(cards.emphasis(2).selected);
    }

    #[test]
    fn test_hover_and_selection_independent() {
        let state = CardInteraction::default()
            .apply(CardEvent::Activate(1))
            .apply(CardEvent::PointerEnter(0))
            .apply(CardEvent::PointerLeave);

        assert_eq!(
            state,
            CardInteraction {
                hovered: None,
                selected: Some(1),
            }
        );
    }
}
