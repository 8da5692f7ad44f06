use std::io::Write;

use crate::domain::{Error, OutputRepository};

/// Collects one line per applied operation and writes them to stdout on flush.
#[derive(Default, Debug)]
pub struct StdOutOutput {
    lines: Vec<String>,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl OutputRepository for StdOutOutput {
    fn report(&mut self, line: String) {
        self.lines.push(line);
    }

    fn flush(&mut self) -> Result<(), Error> {
        let mut out = std::io::stdout().lock();
        for line in self.lines.drain(..) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}
