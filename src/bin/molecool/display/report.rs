use std::io::{self, Write};

use molecool::{AngleUnit, AtomSet, BondGraph, BondWindow};

fn symbol(atoms: &AtomSet, idx: usize) -> &str {
    atoms.atoms.get(idx).map_or("?", |a| a.symbol.as_str())
}

/// Writes one `i j pair distance` line per bond, preceded by a `#` header.
pub fn write_bond_list(
    out: &mut impl Write,
    atoms: &AtomSet,
    graph: &BondGraph,
    window: &BondWindow,
) -> io::Result<()> {
    writeln!(
        out,
        "# {} bonds ({} < d < {} Å)",
        graph.len(),
        window.min_bond,
        window.max_bond
    )?;
    writeln!(out, "# {:>4} {:>6}  {:<6} {:>12}", "i", "j", "pair", "distance")?;

    for (pair, d) in graph {
        let label = format!("{}-{}", symbol(atoms, pair.i()), symbol(atoms, pair.j()));
        writeln!(out, "{:>6} {:>6}  {:<6} {:>12.6}", pair.i(), pair.j(), label, d)?;
    }

    Ok(())
}

/// Writes one `a b c triple angle` line per bonded angle, `b` being the vertex.
pub fn write_angle_list(
    out: &mut impl Write,
    atoms: &AtomSet,
    angles: &[([usize; 3], f64)],
    unit: AngleUnit,
) -> io::Result<()> {
    writeln!(out, "# {} angles ({})", angles.len(), unit.suffix())?;
    writeln!(
        out,
        "# {:>4} {:>6} {:>6}  {:<9} {:>12}",
        "a", "b", "c", "triple", "angle"
    )?;

    for &([a, b, c], value) in angles {
        let label = format!(
            "{}-{}-{}",
            symbol(atoms, a),
            symbol(atoms, b),
            symbol(atoms, c)
        );
        writeln!(out, "{a:>6} {b:>6} {c:>6}  {label:<9} {value:>12.6}")?;
    }

    Ok(())
}
