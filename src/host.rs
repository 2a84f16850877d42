//! Host collaborator interface
//!
//! The host owns the input source and the display. On every text change it
//! passes the current text to [`on_input`], which generates the numeronym and
//! hands it back through [`Host::render`]. Nothing is retained between events.

use std::io::{self, Write};

use crate::numeronym::Generator;

/// Display side of the host
pub trait Host {
    type Error;

    /// Show a freshly generated numeronym
    fn render(&mut self, numeronym: &str) -> Result<(), Self::Error>;
}

/// Handle a single input-change event
pub fn on_input<H: Host>(generator: &Generator, host: &mut H, text: &str) -> Result<(), H::Error> {
    let numeronym = generator.generate(text);
    host.render(&numeronym)
}

/// Host that writes each numeronym as a line
pub struct WriteHost<W: Write> {
    writer: W,
}

impl<W: Write> WriteHost<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Host for WriteHost<W> {
    type Error = io::Error;

    fn render(&mut self, numeronym: &str) -> io::Result<()> {
        writeln!(self.writer, "{numeronym}")?;
        self.writer.flush()
    }
}
