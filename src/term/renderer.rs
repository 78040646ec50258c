//! TerminalRenderer: flushes rendered frames to a real terminal.
//!
//! Full-frame redraws via queued crossterm commands. At one gravity step
//! per half second there is no need for diffing or throttling.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Enter raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Callers should invoke this on every exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, one string per terminal row, from the top-left corner.
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            self.stdout.queue(Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
