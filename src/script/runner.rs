use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::io::{BufRead, Write};
use std::mem::take;
use tracing::{debug, info};

use super::Command;
use text_rope::Rope;

/// Replays script commands against a rope, writing reports to `out`.
pub struct Session<W: Write> {
    pub(crate) rope: Rope,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(text: &str, out: W) -> Self {
        Self { rope: Rope::new(text), out }
    }

    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<(), Report> {
        for (number, line) in reader.lines().enumerate() {
            let line = line.wrap_err("Error reading script")?;
            let command = Command::parse(&line).wrap_err_with(|| format!("Line {}", number + 1))?;

            if let Some(command) = command {
                self.execute(command).wrap_err_with(|| format!("Line {}", number + 1))?;
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<(), Report> {
        debug!(?command, len = self.rope.len(), "executing");

        match command {
            Command::Append(text) => self.rope.append(&text),
            Command::Insert(index, text) => self.rope.insert(index, &text)?,
            Command::Delete(index, size) => self.rope.delete(index, size)?,
            Command::Split(index) => {
                let right = self.rope.split_off(index)?;
                writeln!(self.out, "{:?} | {:?}", self.rope.to_text(), right.to_text())?;
                self.rope = Rope::concatenate(take(&mut self.rope), right);
            }
            Command::Rebalance => self.rope.rebalance(),
            Command::Print => writeln!(self.out, "{}", self.rope)?,
            Command::Stats => self.write_stats()?,
        }

        Ok(())
    }

    pub fn write_stats(&mut self) -> Result<(), Report> {
        let (len, depth, leaves) = (self.rope.len(), self.rope.depth(), self.rope.leaf_count());
        info!(len, depth, leaves, "rope stats");
        writeln!(self.out, "length: {}, depth: {}, leaves: {}", len, depth, leaves)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, Report> {
        writeln!(self.out, "{}", self.rope)?;
        self.out.flush()?;
        Ok(self.out)
    }
}
