use crate::io::{Format, error::Error, util};
use crate::model::{atom::Atom, system::AtomSet};
use log::debug;
use std::io::BufRead;

/// Reads `ATOM`/`HETATM` records up to the first `END` or `ENDMDL`.
///
/// The element comes from columns 77–78. When those are blank it falls back to
/// columns 13–14 of the atom name, where PDB right-justifies the element.
pub fn read<R: BufRead>(reader: R) -> Result<AtomSet, Error> {
    let lines = util::numbered_lines(reader)?;

    let mut atoms = Vec::new();
    let mut comment = String::new();

    for (ln, raw) in &lines {
        let record = raw.get(0..6).unwrap_or(raw.as_str()).trim_end();
        match record {
            "ATOM" | "HETATM" => atoms.push(parse_atom(raw, *ln)?),
            "HEADER" | "TITLE" if comment.is_empty() => {
                comment = raw.get(10..).unwrap_or_default().trim().to_string();
            }
            "END" | "ENDMDL" => break,
            _ => {}
        }
    }

    if atoms.is_empty() {
        return Err(Error::parse(
            Format::Pdb,
            lines.len().max(1),
            "no ATOM or HETATM records found",
        ));
    }

    debug!("read {} atoms from PDB records", atoms.len());
    Ok(AtomSet { atoms, comment })
}

fn parse_atom(line: &str, ln: usize) -> Result<Atom, Error> {
    if !line.is_ascii() {
        return Err(Error::parse(
            Format::Pdb,
            ln,
            "atom record contains non-ASCII characters",
        ));
    }
    if line.len() < 54 {
        return Err(Error::parse(
            Format::Pdb,
            ln,
            "atom record is too short to hold coordinates",
        ));
    }

    let coord = |range: std::ops::Range<usize>, axis: &str| {
        line[range].trim().parse::<f64>().map_err(|_| {
            Error::parse(Format::Pdb, ln, format!("invalid {axis} coordinate in atom record"))
        })
    };
    let position = [coord(30..38, "x")?, coord(38..46, "y")?, coord(46..54, "z")?];

    let element_column = line.get(76..78).unwrap_or_else(|| line.get(76..).unwrap_or_default());
    let symbol = util::normalize_symbol(element_column)
        .or_else(|| util::normalize_symbol(&line[12..14]))
        .ok_or_else(|| Error::parse(Format::Pdb, ln, "unable to determine element symbol"))?;

    Ok(Atom::new(symbol, position))
}
