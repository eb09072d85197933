use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType},
};

use crate::layout::viewport::Viewport;

/// Terminal control needed by the live clock.
pub trait Terminal {
    fn clear_screen(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn viewport(&self) -> Viewport;
}

pub struct CrosstermTerminal<W: Write> {
    out: W,
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl CrosstermTerminal<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        // Flushed together with the next frame.
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.out, Show)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn viewport(&self) -> Viewport {
        Viewport::detect()
    }
}
