use std::io::{self, Write};

use anyhow::{Context, Result, bail};

use molecool::{AngleUnit, AtomSet, angle};

use super::read_structure;
use crate::cli::AngleArgs;
use crate::display::{Context as DisplayContext, print_angle_info};

pub fn run_angle(args: AngleArgs, ctx: DisplayContext) -> Result<()> {
    let atoms = read_structure(&args.input)?;
    let triple = [args.first, args.vertex, args.last];
    check_indices(&atoms, &triple)?;

    let [a, b, c] = triple;
    let unit = AngleUnit::from_degrees_flag(args.degrees);
    let value = angle(
        atoms.atoms[a].position,
        atoms.atoms[b].position,
        atoms.atoms[c].position,
        unit,
    )
    .with_context(|| format!("Angle {a}-{b}-{c} cannot be measured at vertex atom {b}"))?;

    if ctx.interactive {
        print_angle_info(&atoms, triple, value, unit);
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{value:.6}").context("Failed to write angle")?;

    Ok(())
}

fn check_indices(atoms: &AtomSet, indices: &[usize]) -> Result<()> {
    let n = atoms.atom_count();
    if n == 0 {
        bail!("Structure contains no atoms");
    }
    for &idx in indices {
        if idx >= n {
            bail!(
                "Atom index {idx} is out of range: the structure has {n} atoms (valid indices 0..={})",
                n - 1
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_within_range_pass() {
        let atoms = AtomSet::from_parts(&["H", "O", "H"], &[[0.0; 3]; 3]).unwrap();
        assert!(check_indices(&atoms, &[0, 1, 2]).is_ok());
    }

    #[test]
    fn out_of_range_index_is_named() {
        let atoms = AtomSet::from_parts(&["H", "O"], &[[0.0; 3]; 2]).unwrap();
        let err = check_indices(&atoms, &[0, 1, 5]).unwrap_err();
        assert!(err.to_string().contains("Atom index 5 is out of range"));
        assert!(err.to_string().contains("0..=1"));
    }

    #[test]
    fn empty_structure_is_rejected() {
        assert!(check_indices(&AtomSet::new(), &[0, 0, 0]).is_err());
    }
}
