use std::io::{self, Write};

use crate::domain::GridField;

/// Writes each rendered generation to a text sink, one frame per call
pub struct ConsolePrinter<W: Write> {
    out: W,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the field followed by a newline and flush
    pub fn print(&mut self, field: &GridField) -> io::Result<()> {
        writeln!(self.out, "{}", field.render())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
