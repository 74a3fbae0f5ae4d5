#![forbid(unsafe_code)]

//! Presenter: diffed frame output.
//!
//! The presenter keeps the previously shown frame and emits terminal
//! commands only for cells that changed, tracking cursor position and
//! style to skip redundant sequences. A size change discards the kept
//! frame and forces a full repaint.

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use crate::buffer::Buffer;
use crate::cell::{Cell, Rgb, StyleFlags};

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Cached style state for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CellStyle {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        }
    }
}

fn to_color(rgb: Option<Rgb>) -> Color {
    match rgb {
        Some(c) => Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        },
        None => Color::Reset,
    }
}

/// Diffing terminal presenter.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    /// Last frame shown, or `None` before the first present / after resize.
    shown: Option<Buffer>,
    /// Current style state (`None` = unknown, emit unconditionally).
    current_style: Option<CellStyle>,
    /// Cursor position after the last emitted cell (`None` = unknown).
    cursor: Option<(u16, u16)>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            shown: None,
            current_style: None,
            cursor: None,
        }
    }

    /// Present a frame, emitting only the cells that differ from the
    /// previous one and flushing once at the end.
    pub fn present(&mut self, frame: &Buffer) -> io::Result<()> {
        let full_repaint = self
            .shown
            .as_ref()
            .is_none_or(|prev| prev.size() != frame.size());
        if full_repaint {
            queue!(self.writer, Clear(ClearType::All))?;
            self.current_style = None;
            self.cursor = None;
        }

        #[cfg(feature = "tracing")]
        fitui_core::logging::trace!(
            width = frame.width(),
            height = frame.height(),
            full_repaint,
            "present"
        );

        for (x, y, cell) in frame.iter() {
            let unchanged = !full_repaint
                && self
                    .shown
                    .as_ref()
                    .and_then(|prev| prev.get(x, y))
                    .is_some_and(|prev| prev == cell);
            if unchanged {
                continue;
            }
            self.emit_cell(x, y, cell)?;
        }

        queue!(self.writer, ResetColor, SetAttribute(Attribute::Reset))?;
        self.current_style = None;
        self.writer.flush()?;
        self.shown = Some(frame.clone());
        Ok(())
    }

    /// Drop the kept frame so the next present repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
        self.current_style = None;
        self.cursor = None;
    }

    fn emit_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.cursor != Some((x, y)) {
            queue!(self.writer, MoveTo(x, y))?;
        }

        let style = CellStyle::from_cell(cell);
        if self.current_style != Some(style) {
            self.emit_style(style)?;
            self.current_style = Some(style);
        }

        queue!(self.writer, Print(cell.ch))?;
        // Wide characters advance further than one column; treating the
        // position as unknown keeps the next cell from skipping its MoveTo.
        self.cursor = if cell.ch.is_ascii() {
            Some((x.saturating_add(1), y))
        } else {
            None
        };
        Ok(())
    }

    fn emit_style(&mut self, style: CellStyle) -> io::Result<()> {
        queue!(
            self.writer,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(style.fg)),
            SetBackgroundColor(to_color(style.bg)),
        )?;
        if style.attrs.contains(StyleFlags::BOLD) {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if style.attrs.contains(StyleFlags::DIM) {
            queue!(self.writer, SetAttribute(Attribute::Dim))?;
        }
        if style.attrs.contains(StyleFlags::ITALIC) {
            queue!(self.writer, SetAttribute(Attribute::Italic))?;
        }
        if style.attrs.contains(StyleFlags::UNDERLINE) {
            queue!(self.writer, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }
}
