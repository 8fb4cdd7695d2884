use crate::catalog::Step;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// "Next" button.
    Next,
    /// "Prev" button.
    Previous,
}

impl CarouselIntent {
    pub fn step(self) -> Step {
        match self {
            CarouselIntent::Next => Step::Forward,
            CarouselIntent::Previous => Step::Backward,
        }
    }
}

impl Intent for CarouselIntent {}
