#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII-based terminal lifecycle management: the [`TerminalSession`] owns
//! raw-mode entry/exit and tracks which modes it enabled so that Drop can
//! restore the terminal in reverse order. Because cleanup lives in [`Drop`],
//! it also runs during panic unwinding, so no exit path leaves the terminal
//! in raw mode with a hidden cursor.
//!
//! Cleanup order on drop:
//! 1. Show cursor (always)
//! 2. Leave alternate screen (if entered)
//! 3. Exit raw mode
//! 4. Flush stdout

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Terminal session configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer, preserving scrollback.
    pub alternate_screen: bool,
    /// Hide the cursor for the duration of the session.
    pub hide_cursor: bool,
}

/// An active terminal session in raw mode.
///
/// Construct with [`TerminalSession::new`]; the terminal is restored when
/// the value is dropped.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen: bool,
    hide_cursor: bool,
}

impl TerminalSession {
    /// Enter raw mode and apply the requested modes.
    ///
    /// On error, any partially applied state is rolled back before
    /// returning.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if options.alternate_screen
            && let Err(e) = execute!(stdout, EnterAlternateScreen)
        {
            let _ = disable_raw_mode();
            return Err(e);
        }
        if options.hide_cursor
            && let Err(e) = execute!(stdout, Hide)
        {
            if options.alternate_screen {
                let _ = execute!(stdout, LeaveAlternateScreen);
            }
            let _ = disable_raw_mode();
            return Err(e);
        }

        Ok(Self {
            alternate_screen: options.alternate_screen,
            hide_cursor: options.hide_cursor,
        })
    }

    /// Current terminal size as (columns, rows).
    pub fn size() -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Errors during cleanup are ignored: there is nothing useful to do
        // with them while unwinding, and each step is independent.
        let mut stdout = io::stdout();
        if self.hide_cursor {
            let _ = execute!(stdout, Show);
        }
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
        let _ = stdout.flush();
    }
}
