use crate::io::{Format, error::Error, util};
use crate::model::{atom::Atom, system::AtomSet};
use log::debug;
use std::io::BufRead;

/// Reads the first frame of an XYZ stream.
pub fn read<R: BufRead>(reader: R) -> Result<AtomSet, Error> {
    let lines = util::numbered_lines(reader)?;

    let (count_line_no, count_line) = lines
        .first()
        .ok_or_else(|| Error::parse(Format::Xyz, 1, "missing atom count line"))?;
    let atom_count = count_line
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Xyz, *count_line_no, "invalid atom count"))?;

    let comment = lines
        .get(1)
        .map(|(_, text)| text.clone())
        .ok_or_else(|| Error::parse(Format::Xyz, 2, "missing comment line"))?;

    let body = &lines[2..];
    if body.len() < atom_count {
        let last = lines.last().map(|(ln, _)| *ln).unwrap_or(2);
        return Err(Error::parse(
            Format::Xyz,
            last,
            format!(
                "frame ended after {} of {} declared atoms",
                body.len(),
                atom_count
            ),
        ));
    }

    let atoms = parse_atoms(&body[..atom_count])?;
    debug!(
        "read {} atoms from XYZ frame ({} trailing lines ignored)",
        atoms.len(),
        body.len() - atom_count
    );

    Ok(AtomSet { atoms, comment })
}

fn parse_atoms(lines: &[(usize, String)]) -> Result<Vec<Atom>, Error> {
    let mut atoms = Vec::with_capacity(lines.len());
    for (ln, raw) in lines {
        let tokens: Vec<_> = raw.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(Error::parse(
                Format::Xyz,
                *ln,
                "atom line must contain a symbol and three coordinates",
            ));
        }

        let mut position = [0.0; 3];
        for (axis, (slot, token)) in position.iter_mut().zip(&tokens[1..4]).enumerate() {
            *slot = token.parse::<f64>().map_err(|_| {
                Error::parse(
                    Format::Xyz,
                    *ln,
                    format!("invalid {} coordinate '{}'", ["x", "y", "z"][axis], token),
                )
            })?;
        }

        atoms.push(Atom::new(tokens[0], position));
    }
    Ok(atoms)
}
