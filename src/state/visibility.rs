//! Which of the two views is on screen

/// The cover and the cards are mutually exclusive; `toggle` is the only way
/// to move between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Welcome cover shown, cards hidden
    #[default]
    CoverShown,
    /// Information cards shown, cover hidden
    CardsShown,
}

impl Visibility {
    /// Flip to the other view
    pub fn toggle(&mut self) {
        *self = match self {
            Visibility::CoverShown => Visibility::CardsShown,
            Visibility::CardsShown => Visibility::CoverShown,
        };
    }

    pub fn is_cover_shown(&self) -> bool {
        matches!(self, Visibility::CoverShown)
    }

    pub fn is_cards_shown(&self) -> bool {
        matches!(self, Visibility::CardsShown)
    }
}
