//! Non-blocking key polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

/// Source of "a key was pressed" signals.
pub trait KeyPoll {
    /// Return immediately with whether a key press is pending.
    ///
    /// Which key it was does not matter.
    fn key_pressed(&mut self) -> Result<bool>;
}

/// Check if an event should stop the animation.
///
/// Any key press does. Releases and auto-repeats are ignored so terminals
/// that report them don't count one keystroke twice; resize, mouse, focus and
/// paste events are not key presses.
pub fn is_exit_event(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press)
}

/// [`KeyPoll`] backed by the terminal's event queue.
///
/// Raw mode must already be enabled (the renderer does this on enter),
/// otherwise the terminal line-buffers input and keys arrive late.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeyPoll for CrosstermKeys {
    fn key_pressed(&mut self) -> Result<bool> {
        // Drain everything queued so stale non-key events don't pile up.
        while event::poll(Duration::ZERO)? {
            if is_exit_event(&event::read()?) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind,
    };

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn any_key_press_exits() {
        assert!(is_exit_event(&key(KeyCode::Char('q'), KeyEventKind::Press)));
        assert!(is_exit_event(&key(KeyCode::Char('x'), KeyEventKind::Press)));
        assert!(is_exit_event(&key(KeyCode::Enter, KeyEventKind::Press)));
        assert!(is_exit_event(&key(KeyCode::Esc, KeyEventKind::Press)));
        assert!(is_exit_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        ))));
    }

    #[test]
    fn release_and_repeat_are_ignored() {
        assert!(!is_exit_event(&key(KeyCode::Char('a'), KeyEventKind::Release)));
        assert!(!is_exit_event(&key(KeyCode::Char('a'), KeyEventKind::Repeat)));
    }

    #[test]
    fn non_key_events_are_ignored() {
        assert!(!is_exit_event(&Event::Resize(80, 24)));
        assert!(!is_exit_event(&Event::FocusGained));
        assert!(!is_exit_event(&Event::Paste("hello".to_owned())));
        assert!(!is_exit_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })));
    }
}
