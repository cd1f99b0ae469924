use std::error::Error as StdError;
use std::io::{self, Write};

use anyhow::Error;

use molecool::io::{Error as IoError, Format};
use molecool::{ConfigError, DomainError, LookupError, ValidationError};

use crate::util::text::{truncate, wrap};

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in box_lines(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {line:<59} ║");
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in box_lines(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {line:<57} ║");
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = box_lines(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {first:<55} ║");
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {line:<55} ║");
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Wrapped lines that never exceed `width` characters.
fn box_lines(text: &str, width: usize) -> Vec<String> {
    wrap(text, width)
        .into_iter()
        .map(|line| truncate(&line, width))
        .collect()
}

/// First error of type `T` anywhere in the cause chain.
fn find<T: StdError + 'static>(err: &Error) -> Option<&T> {
    err.chain().find_map(|cause| cause.downcast_ref::<T>())
}

fn hints_for(err: &Error) -> Vec<String> {
    let mut hints = HintCollector::default();

    if let Some(e) = find::<IoError>(err) {
        hints.structure_io(e);
    } else if let Some(e) = find::<io::Error>(err) {
        hints.std_io(e);
    }
    if let Some(e) = find::<ConfigError>(err) {
        hints.config(e);
    }
    if let Some(e) = find::<LookupError>(err) {
        hints.lookup(e);
    }
    if let Some(e) = find::<DomainError>(err) {
        hints.domain(e);
    }
    if let Some(e) = find::<ValidationError>(err) {
        hints.validation(e);
    }

    if hints.0.is_empty() {
        hints.fallback(err);
    }
    hints.0
}

#[derive(Default)]
struct HintCollector(Vec<String>);

impl HintCollector {
    fn add(&mut self, hint: impl Into<String>) {
        self.0.push(hint.into());
    }

    fn structure_io(&mut self, err: &IoError) {
        match err {
            IoError::Io { source } => self.std_io(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!("Inspect line {line} of the {format} input"));
                self.add("Use --infmt if the extension does not match the content");
                match format {
                    Format::Xyz => {
                        self.add("XYZ: line 1 is the atom count and line 2 the comment");
                        self.add("XYZ: each atom line needs a symbol followed by x y z");
                    }
                    Format::Pdb => {
                        self.add("PDB: coordinates must sit in columns 31-54 of ATOM/HETATM records");
                    }
                }
            }

            // Validation is reported by its own downcast.
            IoError::Validation(_) => {}

            IoError::UnsupportedWriteFormat(fmt) => {
                self.add(format!("{fmt} files can be read but not written"));
                self.add("Write XYZ instead: --outfmt xyz");
            }
        }
    }

    fn std_io(&mut self, err: &io::Error) {
        use io::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => {
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("The input is not valid UTF-8 text");
            }
            ErrorKind::BrokenPipe => {
                self.add("The reading end of the pipe closed early (e.g. `| head`)");
            }
            _ => {
                self.add("Check the file path, permissions and free disk space");
            }
        }
    }

    fn config(&mut self, err: &ConfigError) {
        match err {
            ConfigError::Io { .. } => {
                self.add("Check the path given to --config");
            }
            ConfigError::Parse(_) => {
                self.add("Known sections are [bonds] (min_bond, max_bond) and [angles] (unit)");
                self.add("unit must be \"radians\" or \"degrees\"");
            }
            ConfigError::InvalidWindow { name, .. } => {
                self.add(format!("Give {name} a finite distance in Å"));
            }
        }
    }

    fn lookup(&mut self, err: &LookupError) {
        self.add(format!(
            "Symbols with a {} entry: {}",
            err.table,
            err.table.symbols().join(", ")
        ));
        self.add("Symbols are case-sensitive: write Cl, not CL");
    }

    fn domain(&mut self, _err: &DomainError) {
        self.add("Two of the chosen atoms share the same coordinates");
        self.add("Pick a vertex distinct from both endpoints");
    }

    fn validation(&mut self, err: &ValidationError) {
        self.add(format!(
            "Supply exactly one symbol per coordinate ({} vs {})",
            err.symbols, err.coordinates
        ));
    }

    fn fallback(&mut self, err: &Error) {
        let text = err
            .chain()
            .map(|c| c.to_string().to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        if text.contains("terminal") {
            self.add("Provide input via -i/--input or pipe data to stdin");
        } else if text.contains("--infmt") || text.contains("--outfmt") {
            self.add("Supported input formats: xyz, pdb. Supported output format: xyz");
        } else if text.contains("out of range") {
            self.add("Atom indices are 0-based");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn long_paths_do_not_overflow_the_box() {
        let path = format!("/data/{}/water.xyz", "nested".repeat(20));
        let text = format!("Failed to open input file: {path}");
        let lines = box_lines(&text, 59);
        assert!(lines.iter().all(|l| l.chars().count() <= 59));
        assert_eq!(lines[0], "Failed to open input file:");
        assert!(lines[1].ends_with('…'));
    }

    #[test]
    fn lookup_hint_lists_table_symbols() {
        let err = Error::new(molecool::weight_of("Xe").unwrap_err()).context("Cannot weigh");
        let hints = hints_for(&err);
        assert!(hints[0].contains("H, C, N, O, P, F, Cl, Br"));
    }

    #[test]
    fn parse_hint_names_the_line() {
        let err = Error::new(IoError::parse(Format::Xyz, 3, "invalid x coordinate"));
        let hints = hints_for(&err);
        assert_eq!(hints[0], "Inspect line 3 of the XYZ input");
    }

    #[test]
    fn std_io_error_under_context_is_found() {
        let result: Result<(), io::Error> = Err(io::Error::from(io::ErrorKind::NotFound));
        let err = result.context("Failed to open input file").unwrap_err();
        assert!(hints_for(&err)[0].contains("ensure the file exists"));
    }

    #[test]
    fn untyped_errors_fall_back_to_message() {
        let err = anyhow::anyhow!("Atom index 7 is out of range");
        assert_eq!(hints_for(&err), vec!["Atom indices are 0-based"]);
    }
}
