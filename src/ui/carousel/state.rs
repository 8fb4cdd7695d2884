use crate::catalog::{CharacterNavigator, Entry};
use crate::ui::mvi::UiState;

/// Which card is on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    navigator: CharacterNavigator,
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn current(&self) -> &'static Entry {
        self.navigator.current()
    }

    pub fn position(&self) -> usize {
        self.navigator.position()
    }

    pub fn len(&self) -> usize {
        self.navigator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.navigator.is_empty()
    }

    pub(super) fn navigator_mut(&mut self) -> &mut CharacterNavigator {
        &mut self.navigator
    }
}
