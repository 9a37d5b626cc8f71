use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use super::render_grid;
use crate::game::{Color, ColumnIndex, Grid, Player};

/// Where a console player reads its answers, one line at a time.
///
/// `Stdin` takes its lock for each line only, so several players can share
/// the terminal.
pub trait LineSource {
    /// Append the next line to `buf`. Returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A human player typing 1-based column numbers.
///
/// Bad input is reported and asked again; the engine only ever sees a
/// free column.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl ConsolePlayer<Stdin, Stdout> {
    /// Play on the process terminal.
    pub fn stdio() -> Self {
        ConsolePlayer::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePlayer { input, output }
    }

    /// Prompt until a free column is typed. `Ok(None)` on end of input.
    fn ask_column(&mut self, grid: &Grid) -> io::Result<Option<ColumnIndex>> {
        let free = grid.free_columns();
        let choices = free
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        write!(self.output, "{}", render_grid(grid, None))?;
        writeln!(self.output)?;
        loop {
            writeln!(self.output, "Choose your column ({choices}) : ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<usize>().ok().and_then(ColumnIndex::from_one_based) {
                Some(column) if free.contains(&column) => return Ok(Some(column)),
                Some(_) => writeln!(self.output, "\n\tNot a free column")?,
                None => writeln!(self.output, "\n\tBad input")?,
            }
        }
    }
}

impl<R: LineSource, W: Write> Player for ConsolePlayer<R, W> {
    fn select_column(&mut self, color: Color, grid: &Grid) -> ColumnIndex {
        let forfeit = || {
            let free = grid.free_columns();
            assert!(!free.is_empty(), "No free column available");
            free[0]
        };

        match self.ask_column(grid) {
            Ok(Some(column)) => column,
            Ok(None) => {
                tracing::warn!(%color, "input closed, playing the first free column");
                forfeit()
            }
            Err(err) => {
                tracing::warn!(%color, error = %err, "console failed, playing the first free column");
                forfeit()
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
