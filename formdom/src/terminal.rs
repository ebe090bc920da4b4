use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CtEvent, KeyEventKind, MouseButton, MouseEventKind},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::event::{Event, Key};
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode alternate-screen terminal that paints a [`Document`].
///
/// Frames are double buffered; only cells that differ from the previous
/// frame are written.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        stdout.flush()?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal opened at {width}x{height}");
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait up to `timeout` for input and translate everything pending.
    ///
    /// Key releases and mouse motion are dropped, as are keys and buttons nothing handles.
    /// Hosts that re-render on change should commit between dispatching these.
    pub fn poll_events(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }

        loop {
            if let Some(event) = translate(event::read()?) {
                events.push(event);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }

    /// Paint the document and write the changed cells.
    pub fn render(&mut self, document: &mut Document) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        document.render(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut pen = Pen::default();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.continuation {
                continue;
            }
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            pen.apply(&mut self.stdout, cell)?;
            write!(self.stdout, "{}", cell.symbol)?;
            cursor_at = Some((x + char_width(cell.symbol).max(1) as u16, y));
        }
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// The colors and attributes last written, so unchanged ones are not re-sent.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    style: TextStyle,
}

impl Pen {
    fn apply(&mut self, out: &mut impl Write, cell: &Cell) -> io::Result<()> {
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(ct_color(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(ct_color(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        let style = cell.style;
        if style == self.style {
            return Ok(());
        }
        // Bold and dim share one reset, so rebuild intensity from scratch.
        if (style.bold, style.dim) != (self.style.bold, self.style.dim) {
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
            if style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
        }
        if style.underline != self.style.underline {
            let attr = if style.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            queue!(out, SetAttribute(attr))?;
        }
        self.style = style;
        Ok(())
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn translate(event: CtEvent) -> Option<Event> {
    match event {
        CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
            target: None,
            key: Key::from_code(key.code)?,
            modifiers: key.modifiers.into(),
        }),
        CtEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Event::click_at(mouse.column, mouse.row)),
            _ => None,
        },
        CtEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}
