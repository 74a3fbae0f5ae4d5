#![forbid(unsafe_code)]

//! Input events for the demo loop.
//!
//! A thin, backend-neutral event model over the crossterm event stream.
//! Only the events the fit demos consume are represented: key presses and
//! terminal resizes. Key release/repeat events are filtered out at the
//! conversion boundary.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Keys the demos react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    BackTab,
    Enter,
    Esc,
    /// Any key this model does not distinguish.
    Other,
}

/// A key press with modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Check for Ctrl+`c` style chords.
    pub fn is_ctrl(&self, c: char) -> bool {
        self.modifiers.contains(Modifiers::CTRL) && self.code == KeyCode::Char(c)
    }
}

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::io;
    use std::time::Duration;

    use super::{Event, KeyCode, KeyEvent, Modifiers};

    impl From<crossterm::event::KeyEvent> for KeyEvent {
        fn from(key: crossterm::event::KeyEvent) -> Self {
            use crossterm::event::KeyCode as Ct;

            let code = match key.code {
                Ct::Char(c) => KeyCode::Char(c),
                Ct::Left => KeyCode::Left,
                Ct::Right => KeyCode::Right,
                Ct::Up => KeyCode::Up,
                Ct::Down => KeyCode::Down,
                Ct::Home => KeyCode::Home,
                Ct::End => KeyCode::End,
                Ct::Tab => KeyCode::Tab,
                Ct::BackTab => KeyCode::BackTab,
                Ct::Enter => KeyCode::Enter,
                Ct::Esc => KeyCode::Esc,
                _ => KeyCode::Other,
            };

            let mut modifiers = Modifiers::empty();
            if key
                .modifiers
                .contains(crossterm::event::KeyModifiers::SHIFT)
            {
                modifiers |= Modifiers::SHIFT;
            }
            if key
                .modifiers
                .contains(crossterm::event::KeyModifiers::CONTROL)
            {
                modifiers |= Modifiers::CTRL;
            }
            if key.modifiers.contains(crossterm::event::KeyModifiers::ALT) {
                modifiers |= Modifiers::ALT;
            }

            Self { code, modifiers }
        }
    }

    /// Poll for the next event, waiting up to `timeout`.
    ///
    /// Returns `Ok(None)` on timeout and on events the model does not
    /// represent (mouse, focus, paste, key releases).
    pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
        if !crossterm::event::poll(timeout)? {
            return Ok(None);
        }
        match crossterm::event::read()? {
            crossterm::event::Event::Key(key)
                if key.kind == crossterm::event::KeyEventKind::Press =>
            {
                Ok(Some(Event::Key(key.into())))
            }
            crossterm::event::Event::Resize(cols, rows) => Ok(Some(Event::Resize(cols, rows))),
            _ => Ok(None),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use backend::poll_event;

#[cfg(test)]
mod tests {
    use super::{KeyCode, KeyEvent, Modifiers};

    #[test]
    fn ctrl_chord_detection() {
        let plain = KeyEvent::new(KeyCode::Char('c'));
        assert!(!plain.is_ctrl('c'));

        let chord = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: Modifiers::CTRL,
        };
        assert!(chord.is_ctrl('c'));
        assert!(!chord.is_ctrl('q'));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn crossterm_key_conversion_maps_arrows_and_modifiers() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Left,
            crossterm::event::KeyModifiers::SHIFT,
        );
        let key: KeyEvent = ct.into();
        assert_eq!(key.code, KeyCode::Left);
        assert!(key.modifiers.contains(Modifiers::SHIFT));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn unknown_keys_collapse_to_other() {
        let ct = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::F(5),
            crossterm::event::KeyModifiers::NONE,
        );
        let key: KeyEvent = ct.into();
        assert_eq!(key.code, KeyCode::Other);
    }
}
