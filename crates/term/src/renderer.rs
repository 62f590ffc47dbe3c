//! TerminalRenderer: flushes composed screens to a real terminal.
//!
//! The drawing API is intentionally small: one call per frame with the full
//! screen text. Commands are queued into an internal byte buffer and written
//! to stdout in a single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a composed screen from the top-left corner.
    ///
    /// Each line is cleared to its end and the region below the screen is
    /// wiped, so a frame shorter than the previous one leaves no residue.
    pub fn draw(&mut self, screen: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;

        for line in screen.lines() {
            self.buf.queue(Print(line))?;
            self.buf.queue(terminal::Clear(ClearType::UntilNewLine))?;
            // Raw mode: explicit carriage return.
            self.buf.queue(Print("\r\n"))?;
        }

        self.buf.queue(terminal::Clear(ClearType::FromCursorDown))?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
