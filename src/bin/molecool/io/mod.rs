mod infer;

pub use infer::{input as infer_input_format, output as infer_output_format};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

/// Opens `path` for buffered reading, or locks stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    let Some(p) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };
    let file =
        File::open(p).with_context(|| format!("Failed to open input file: {}", p.display()))?;
    log::debug!("reading {}", p.display());
    Ok(Box::new(BufReader::new(file)))
}

/// Creates (truncating) `path` for buffered writing, or locks stdout when no path is given.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(p) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };
    let file = File::create(p)
        .with_context(|| format!("Failed to create output file: {}", p.display()))?;
    log::debug!("writing {}", p.display());
    Ok(Box::new(BufWriter::new(file)))
}
