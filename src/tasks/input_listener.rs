//! Terminal event loop feeding the controller

use std::sync::Arc;
use crossterm::event::{Event, EventStream, KeyEvent};
use futures::{Stream, StreamExt};
use tracing::{debug, error, info};

use crate::{input, state::AppState};

/// What the event loop should do after handling one event
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Read terminal events until Ctrl+C or the end of input.
///
/// Key presses are forwarded to the controller unless `debug` is set, resize
/// events reach the renderer, and every timer change redraws the status line.
pub async fn input_listener_task(state: Arc<AppState>, debug: bool) -> anyhow::Result<()> {
    info!("Starting input listener task");
    listen(state, EventStream::new(), debug).await
}

async fn listen<S>(state: Arc<AppState>, mut events: S, debug: bool) -> anyhow::Result<()>
where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    let mut timer_rx = state.timer_updates();

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if handle_event(&state, event, debug) == Flow::Quit {
                            info!("Quit requested");
                            return Ok(());
                        }
                    }
                    Some(Err(e)) => {
                        error!("Error reading terminal event: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        info!("Terminal event stream closed");
                        return Ok(());
                    }
                }
            }

            Ok(()) = timer_rx.changed() => {
                let timer = timer_rx.borrow_and_update().clone();
                state.refresh_status(&timer);
            }
        }
    }
}

fn handle_event(state: &AppState, event: Event, debug: bool) -> Flow {
    match event {
        Event::Key(key) => handle_key(state, &key, debug),
        Event::Resize(cols, rows) => {
            state.resize(cols, rows);
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}

fn handle_key(state: &AppState, key: &KeyEvent, debug: bool) -> Flow {
    if input::is_quit(key) {
        return Flow::Quit;
    }
    if debug {
        debug!("Debug mode, ignoring key {:?}", key.code);
        return Flow::Continue;
    }

    let snapshot = input::snapshot(key);
    if !snapshot.is_keydown() {
        debug!("Ignoring {} for {:?}", snapshot.event_type, snapshot.key);
        return Flow::Continue;
    }

    state.handle_key_event(&snapshot);
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render::Renderer, state::Visibility, cards::CardFragment};
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
    use futures::stream;

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn show(&mut self, _visibility: Visibility) -> std::io::Result<()> {
            Ok(())
        }
        fn render(&mut self, _cards: &[CardFragment]) -> std::io::Result<()> {
            Ok(())
        }
        fn update(&mut self, _cards: &[CardFragment]) -> std::io::Result<()> {
            Ok(())
        }
        fn clear(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn app() -> Arc<AppState> {
        Arc::new(AppState::new(Box::new(NullRenderer), 5))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> std::io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[tokio::test(start_paused = true)]
    async fn key_press_activates_controller() {
        let state = app();
        let events = stream::iter(vec![key(KeyCode::Char('a'), KeyModifiers::NONE)]);

        listen(Arc::clone(&state), events, false).await.unwrap();

        assert_eq!(state.visibility(), Visibility::CardsShown);
        assert!(state.timer_state().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn ctrl_c_stops_before_later_keys() {
        let state = app();
        let events = stream::iter(vec![
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::Char('a'), KeyModifiers::NONE),
        ]);

        listen(Arc::clone(&state), events, false).await.unwrap();

        assert_eq!(state.visibility(), Visibility::CoverShown);
    }

    #[tokio::test(start_paused = true)]
    async fn key_release_is_ignored() {
        let state = app();
        let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        let events = stream::iter(vec![Ok(Event::Key(release))]);

        listen(Arc::clone(&state), events, false).await.unwrap();

        assert_eq!(state.visibility(), Visibility::CoverShown);
    }

    #[tokio::test(start_paused = true)]
    async fn debug_mode_does_not_forward_keys() {
        let state = app();
        state.run_debug();
        let events = stream::iter(vec![key(KeyCode::Char('a'), KeyModifiers::NONE)]);

        listen(Arc::clone(&state), events, true).await.unwrap();

        assert!(!state.timer_state().is_running());
        assert!(state.get_last_event_time().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stream_error_is_returned() {
        let state = app();
        let events = stream::iter(vec![Err(std::io::Error::other("tty gone"))]);

        assert!(listen(state, events, false).await.is_err());
    }
}
