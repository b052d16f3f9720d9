//! Terminal renderer built on crossterm

use std::io::{self, Write};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use chrono::Local;
use tracing::{debug, info, warn};

use super::{Renderer, StatusLine};
use crate::{cards::CardFragment, state::Visibility};

const CARD_WIDTH: usize = 34;
const CARD_GAP: usize = 1;

const COVER_TITLE: &str = "KeyCode Challenge";
const COVER_PROMPT: &str = "Press any key to get started";
const QUIT_HINT: &str = "Ctrl+C to quit";

/// Draws the cover or the card grid onto a terminal-like writer.
///
/// Every change redraws the whole frame from the retained state.
pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    visibility: Visibility,
    cards: Vec<CardFragment>,
    status: StatusLine,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols,
            rows,
            visibility: Visibility::default(),
            cards: Vec::new(),
            status: StatusLine::default(),
        }
    }

    #[cfg(test)]
    fn writer(&self) -> &W {
        &self.out
    }

    fn redraw(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        match self.visibility {
            Visibility::CoverShown => self.draw_cover()?,
            Visibility::CardsShown => {
                self.draw_cards()?;
                self.draw_status()?;
            }
        }

        self.out.flush()
    }

    fn draw_cover(&mut self) -> io::Result<()> {
        let middle = self.rows / 2;
        let lines = [
            (middle.saturating_sub(1), COVER_TITLE, true),
            (middle + 1, COVER_PROMPT, false),
            (self.rows.saturating_sub(1), QUIT_HINT, false),
        ];

        for (row, text, bold) in lines {
            let col = centered(text, self.cols);
            queue!(self.out, MoveTo(col, row))?;
            if bold {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.out, Print(text))?;
            }
        }
        Ok(())
    }

    fn draw_cards(&mut self) -> io::Result<()> {
        // Last row belongs to the status line
        let usable_rows = self.rows.saturating_sub(1);
        for (col, row, line) in compose_cards(&self.cards, self.cols) {
            if row >= usable_rows {
                continue;
            }
            queue!(self.out, MoveTo(col, row), Print(line))?;
        }
        Ok(())
    }

    fn draw_status(&mut self) -> io::Result<()> {
        let line = fit(&status_text(&self.status), usize::from(self.cols));
        queue!(
            self.out,
            MoveTo(0, self.rows.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(line),
            SetAttribute(Attribute::Reset)
        )
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn show(&mut self, visibility: Visibility) -> io::Result<()> {
        self.visibility = visibility;
        self.redraw()
    }

    fn render(&mut self, cards: &[CardFragment]) -> io::Result<()> {
        self.cards = cards.to_vec();
        self.redraw()
    }

    fn update(&mut self, cards: &[CardFragment]) -> io::Result<()> {
        for fragment in cards {
            match self.cards.iter_mut().find(|card| card.label == fragment.label) {
                Some(card) => card.body.clone_from(&fragment.body),
                None => self.cards.push(fragment.clone()),
            }
        }
        self.redraw()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cards.clear();
        self.redraw()
    }

    fn status(&mut self, status: &StatusLine) -> io::Result<()> {
        if self.status == *status {
            return Ok(());
        }
        self.status = status.clone();
        self.redraw()
    }

    fn resize(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        self.cols = cols;
        self.rows = rows;
        self.redraw()
    }
}

/// Lay the cards out left to right, wrapping onto new rows.
///
/// Returns `(col, row, text)` triples, one per card line.
pub fn compose_cards(cards: &[CardFragment], cols: u16) -> Vec<(u16, u16, String)> {
    let cols = usize::from(cols);
    let width = CARD_WIDTH.min(cols).max(5);

    let mut placed = Vec::new();
    let (mut x, mut y, mut row_height) = (0usize, 0usize, 0usize);

    for card in cards {
        if x > 0 && x + width > cols {
            x = 0;
            y += row_height;
            row_height = 0;
        }

        let lines = card_lines(card, width);
        row_height = row_height.max(lines.len());
        for (offset, line) in lines.into_iter().enumerate() {
            placed.push((to_u16(x), to_u16(y + offset), line));
        }
        x += width + CARD_GAP;
    }

    placed
}

/// Box drawing for a single card of the given outer width
fn card_lines(card: &CardFragment, width: usize) -> Vec<String> {
    let inner = width - 4;
    let rule = "─".repeat(width - 2);
    let row = |text: &str| format!("│ {} │", fit(text, inner));

    let mut lines = vec![format!("┌{}┐", rule), row(card.label), format!("├{}┤", rule)];
    if card.body.is_empty() {
        lines.push(row(""));
    } else {
        lines.extend(card.body.lines().map(row));
    }
    lines.push(format!("├{}┤", rule));
    lines.push(row(card.footer));
    lines.push(format!("└{}┘", rule));
    lines
}

fn status_text(status: &StatusLine) -> String {
    let mut parts = Vec::new();
    if let Some(at) = status.last_event_at {
        parts.push(format!("last key at {}", at.with_timezone(&Local).format("%H:%M:%S")));
    }
    if let Some(seconds) = status.remaining_seconds {
        parts.push(format!("hiding in {}s", seconds));
    }
    parts.push(QUIT_HINT.to_string());
    parts.join(" · ")
}

/// Truncate or pad `text` to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}

fn centered(text: &str, cols: u16) -> u16 {
    let len = to_u16(text.chars().count());
    cols.saturating_sub(len) / 2
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Raw mode and alternate screen for the lifetime of the session
pub struct TerminalSession {
    enhanced_keyboard: bool,
}

impl TerminalSession {
    /// Take over the terminal
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        // Needed for modifier-only presses, key releases and keypad flags
        let enhanced_keyboard = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keyboard {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )?;
        }
        info!("Terminal session started, keyboard enhancement: {}", enhanced_keyboard);

        Ok(Self { enhanced_keyboard })
    }

    /// Current terminal size as `(cols, rows)`
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.enhanced_keyboard {
            if let Err(e) = execute!(stdout, PopKeyboardEnhancementFlags) {
                warn!("Failed to pop keyboard enhancement flags: {}", e);
            }
        }
        if let Err(e) = execute!(stdout, LeaveAlternateScreen, Show) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        debug!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{self, KeyEventSnapshot};

    fn output(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.writer()).into_owned()
    }

    fn snapshot() -> KeyEventSnapshot {
        KeyEventSnapshot {
            key: "q".to_string(),
            code: "KeyQ".to_string(),
            which: 81,
            event_type: "keydown".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn cover_shows_prompt() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 80, 24);
        renderer.show(Visibility::CoverShown).unwrap();

        let text = output(&renderer);
        assert!(text.contains(COVER_TITLE));
        assert!(text.contains(COVER_PROMPT));
    }

    #[test]
    fn cards_show_event_values() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 120, 40);
        renderer.show(Visibility::CardsShown).unwrap();
        renderer.render(&cards::empty_fragments()).unwrap();
        renderer.update(&cards::fragments(&snapshot())).unwrap();

        let text = output(&renderer);
        assert!(text.contains("KeyQ"));
        assert!(text.contains("event.which"));
        assert!(text.contains("(Standard)"));
    }

    #[test]
    fn status_line_shows_countdown() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 80, 24);
        renderer.show(Visibility::CardsShown).unwrap();
        renderer
            .status(&StatusLine {
                remaining_seconds: Some(3),
                last_event_at: None,
            })
            .unwrap();

        assert!(output(&renderer).contains("hiding in 3s"));
    }

    #[test]
    fn cards_wrap_to_next_row() {
        let placed = compose_cards(&cards::empty_fragments(), 70);
        let tops: Vec<_> = placed
            .iter()
            .filter(|(_, _, line)| line.starts_with('┌'))
            .map(|(col, row, _)| (*col, *row))
            .collect();

        // Two 34-wide cards fit side by side in 70 columns
        assert_eq!(tops.len(), 6);
        assert_eq!(tops[0], (0, 0));
        assert_eq!(tops[1], (35, 0));
        assert_eq!(tops[2].0, 0);
        assert!(tops[2].1 > 0);
    }

    #[test]
    fn card_lines_have_equal_width() {
        let fragment = &cards::fragments(&snapshot())[5];
        let lines = card_lines(fragment, CARD_WIDTH);
        assert!(lines.iter().all(|line| line.chars().count() == CARD_WIDTH));
        assert_eq!(lines[1], format!("│ {} │", fit("Dump", CARD_WIDTH - 4)));
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
    }
}
