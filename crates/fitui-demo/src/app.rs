#![forbid(unsafe_code)]

//! Demo application model and synchronous event loop.

use fitui_core::event::{Event, KeyCode};
use fitui_core::geometry::Rect;
use fitui_render::buffer::Buffer;
use fitui_render::style::Style;

use crate::screens::{self, Screen};
use crate::theme;

/// Width slider bounds, in columns. The upper bound is generous; screens
/// additionally clamp to the area they are given.
pub const WIDTH_MIN: u16 = 6;
pub const WIDTH_MAX: u16 = 200;

/// How far one arrow press moves the constraint width.
const WIDTH_STEP: u16 = 2;

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Redraw,
    Quit,
}

/// The demo's entire mutable state.
pub struct App {
    screens: Vec<Box<dyn Screen>>,
    screen_index: usize,
    width: u16,
}

impl App {
    /// Create the app on `start_screen` (1-indexed, clamped to the screen
    /// list) with the given initial constraint width.
    pub fn new(start_screen: u16, width: u16) -> Self {
        let screens = screens::all();
        let screen_index = usize::from(start_screen.max(1) - 1).min(screens.len() - 1);
        Self {
            screens,
            screen_index,
            width: width.clamp(WIDTH_MIN, WIDTH_MAX),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn screen_index(&self) -> usize {
        self.screen_index
    }

    /// Apply one event to the model.
    pub fn update(&mut self, event: Event) -> Action {
        let Event::Key(key) = event else {
            // Resize: the next frame re-measures everything.
            return Action::Redraw;
        };

        if key.is_ctrl('c') {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Left => {
                self.width = self.width.saturating_sub(WIDTH_STEP).max(WIDTH_MIN);
                Action::Redraw
            }
            KeyCode::Right => {
                self.width = self.width.saturating_add(WIDTH_STEP).min(WIDTH_MAX);
                Action::Redraw
            }
            KeyCode::Home => {
                self.width = WIDTH_MIN;
                Action::Redraw
            }
            KeyCode::End => {
                self.width = WIDTH_MAX;
                Action::Redraw
            }
            KeyCode::Tab => {
                self.screen_index = (self.screen_index + 1) % self.screens.len();
                Action::Redraw
            }
            KeyCode::BackTab => {
                self.screen_index =
                    (self.screen_index + self.screens.len() - 1) % self.screens.len();
                Action::Redraw
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && (digit as usize) <= self.screens.len()
                {
                    self.screen_index = digit as usize - 1;
                    return Action::Redraw;
                }
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    /// Render the full frame: tab bar, blurb, screen body, key help.
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.bounds();
        if area.width < 20 || area.height < 6 {
            return;
        }

        let accent = Style::new().fg(theme::ACCENT).bold();
        let muted = Style::new().fg(theme::MUTED);

        // Tab bar.
        let mut x = area.x;
        for (index, screen) in self.screens.iter().enumerate() {
            let label = format!(" {} {} ", index + 1, screen.title());
            let style = if index == self.screen_index {
                accent
            } else {
                muted
            };
            let advanced = buf.draw_text(x, 0, &label, area.width.saturating_sub(x), style);
            x = x.saturating_add(advanced).saturating_add(1);
        }

        let screen = &self.screens[self.screen_index];
        buf.draw_text(area.x, 1, screen.blurb(), area.width, muted);

        let body = Rect::new(area.x, 2, area.width, area.height.saturating_sub(3));
        screen.render(self.width, body, buf);

        let help = "←/→ width   Home/End jump   Tab screens   q quit";
        buf.draw_text(
            area.x,
            area.height.saturating_sub(1),
            help,
            area.width,
            muted,
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod runner {
    use std::io;
    use std::time::{Duration, Instant};

    use fitui_core::event::poll_event;
    use fitui_core::session::{SessionOptions, TerminalSession};
    use fitui_render::buffer::Buffer;
    use fitui_render::presenter::Presenter;

    use super::{Action, App};

    const POLL_INTERVAL: Duration = Duration::from_millis(50);

    /// Run the demo until quit. `exit_after_ms` of zero disables the
    /// auto-exit timer.
    pub fn run(mut app: App, exit_after_ms: u64) -> io::Result<()> {
        let _session = TerminalSession::new(SessionOptions {
            alternate_screen: true,
            hide_cursor: true,
        })?;
        let mut presenter = Presenter::new(io::stdout());

        let deadline =
            (exit_after_ms > 0).then(|| Instant::now() + Duration::from_millis(exit_after_ms));
        let (mut cols, mut rows) = TerminalSession::size()?;
        let mut dirty = true;

        loop {
            if dirty {
                let mut frame = Buffer::new(cols, rows);
                app.render(&mut frame);
                presenter.present(&frame)?;
                dirty = false;
            }

            if let Some(deadline) = deadline
                && Instant::now() >= deadline
            {
                return Ok(());
            }

            if let Some(event) = poll_event(POLL_INTERVAL)? {
                if let fitui_core::event::Event::Resize(c, r) = event {
                    cols = c;
                    rows = r;
                }
                match app.update(event) {
                    Action::Quit => return Ok(()),
                    Action::Redraw => dirty = true,
                    Action::Continue => {}
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use runner::run;

#[cfg(test)]
mod tests {
    use super::*;
    use fitui_core::event::{KeyEvent, Modifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn arrows_move_width_within_bounds() {
        let mut app = App::new(1, 40);
        assert_eq!(app.update(key(KeyCode::Right)), Action::Redraw);
        assert_eq!(app.width(), 42);
        app.update(key(KeyCode::Left));
        assert_eq!(app.width(), 40);

        app.update(key(KeyCode::Home));
        assert_eq!(app.width(), WIDTH_MIN);
        app.update(key(KeyCode::Left));
        assert_eq!(app.width(), WIDTH_MIN);

        app.update(key(KeyCode::End));
        assert_eq!(app.width(), WIDTH_MAX);
        app.update(key(KeyCode::Right));
        assert_eq!(app.width(), WIDTH_MAX);
    }

    #[test]
    fn tab_cycles_screens_both_ways() {
        let mut app = App::new(1, 40);
        assert_eq!(app.screen_index(), 0);
        app.update(key(KeyCode::Tab));
        assert_eq!(app.screen_index(), 1);
        app.update(key(KeyCode::Tab));
        assert_eq!(app.screen_index(), 0);
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.screen_index(), 1);
    }

    #[test]
    fn number_keys_jump_directly() {
        let mut app = App::new(1, 40);
        assert_eq!(app.update(key(KeyCode::Char('2'))), Action::Redraw);
        assert_eq!(app.screen_index(), 1);
        // Out-of-range digits are ignored.
        assert_eq!(app.update(key(KeyCode::Char('9'))), Action::Continue);
        assert_eq!(app.screen_index(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(1, 40);
        assert_eq!(app.update(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.update(key(KeyCode::Esc)), Action::Quit);
        let ctrl_c = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: Modifiers::CTRL,
        });
        assert_eq!(app.update(ctrl_c), Action::Quit);
    }

    #[test]
    fn start_screen_is_clamped() {
        assert_eq!(App::new(0, 40).screen_index(), 0);
        assert_eq!(App::new(99, 40).screen_index(), 1);
    }

    #[test]
    fn initial_width_is_clamped() {
        assert_eq!(App::new(1, 2).width(), WIDTH_MIN);
        assert_eq!(App::new(1, 9999).width(), WIDTH_MAX);
    }

    #[test]
    fn render_smoke_both_screens() {
        for screen in 1..=2u16 {
            let app = App::new(screen, 40);
            let mut buf = Buffer::new(80, 20);
            app.render(&mut buf);
            let any_ink = buf.iter().any(|(_, _, c)| !c.is_blank());
            assert!(any_ink);
        }
    }

    #[test]
    fn render_into_tiny_buffer_is_safe() {
        let app = App::new(1, 40);
        let mut buf = Buffer::new(5, 2);
        app.render(&mut buf);
    }
}
