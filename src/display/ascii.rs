//! Text art backend.
//!
//! Writes each frame as 64 lines of `#`/`.` followed by a blank line. Useful on a
//! development host with no panel attached, and in `--once` mode for snapshots.

use std::io::Write;

use crate::canvas::Canvas;
use crate::error::DisplayError;

use super::DisplayDriver;

pub struct AsciiDisplay<W: Write> {
    out: W,
}

impl AsciiDisplay<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> AsciiDisplay<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayDriver for AsciiDisplay<W> {
    fn show(&mut self, canvas: &Canvas) -> Result<(), DisplayError> {
        writeln!(self.out, "{}", canvas.to_ascii())
            .and_then(|()| self.out.flush())
            .map_err(|e| DisplayError::Push(e.to_string()))
    }

    fn shutdown(&mut self) -> Result<(), DisplayError> {
        self.out.flush().map_err(|e| DisplayError::Push(e.to_string()))
    }
}
