//! Event handling module.
//!
//! This module turns crossterm terminal events into application actions.

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;

/// Represents the different actions a user (or the terminal) can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Put every counter back to its reset seed
    Reset,
    /// The terminal was resized to (width, height)
    Resize(u16, u16),
}

/// Reads terminal events asynchronously and converts them to actions.
pub struct EventHandler {
    stream: EventStream,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Waits for the next terminal event.
    ///
    /// Returns Ok(None) for events that carry no action.
    /// Errors when the event stream fails or closes.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        let event = self
            .stream
            .next()
            .await
            .context("Terminal event stream closed")?
            .context("Failed to read terminal event")?;
        Ok(to_action(event))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a terminal event to an application action.
pub(crate) fn to_action(event: Event) -> Option<Action> {
    match event {
        // Only process key press events (not releases)
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_action(key),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Converts a key event to an application action.
pub(crate) fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Check for Ctrl+C first (quit)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_actions() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(key_to_action(make_key_event(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_reset_key() {
        assert_eq!(
            key_to_action(make_key_event(KeyCode::Char('r'))),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(key_to_action(make_key_event(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_unknown_key_returns_none() {
        assert_eq!(key_to_action(make_key_event(KeyCode::Char('z'))), None);
        assert_eq!(key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = make_key_event(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(to_action(Event::Key(key)), None);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            to_action(Event::Resize(120, 40)),
            Some(Action::Resize(120, 40))
        );
    }

    #[test]
    fn test_focus_events_are_ignored() {
        assert_eq!(to_action(Event::FocusGained), None);
    }
}
