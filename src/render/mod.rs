//! Display rendering module
//!
//! The controller talks to the screen only through the [`Renderer`] trait.

pub mod terminal;

use std::io;
use chrono::{DateTime, Utc};

use crate::{cards::CardFragment, state::Visibility};

pub use terminal::{TerminalRenderer, TerminalSession};

/// Footer information shown under the cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    /// Seconds until the cards hide, while the countdown runs
    pub remaining_seconds: Option<u64>,
    /// When the last key event was shown
    pub last_event_at: Option<DateTime<Utc>>,
}

/// Something that can put the cover and the information cards on screen
pub trait Renderer: Send {
    /// Show the view matching `visibility` and hide the other one
    fn show(&mut self, visibility: Visibility) -> io::Result<()>;

    /// Lay out the cards, replacing whatever the container held
    fn render(&mut self, cards: &[CardFragment]) -> io::Result<()>;

    /// Replace the content of the cards already laid out
    fn update(&mut self, cards: &[CardFragment]) -> io::Result<()>;

    /// Empty the cards container
    fn clear(&mut self) -> io::Result<()>;

    fn status(&mut self, _status: &StatusLine) -> io::Result<()> {
        Ok(())
    }

    fn resize(&mut self, _cols: u16, _rows: u16) -> io::Result<()> {
        Ok(())
    }
}
