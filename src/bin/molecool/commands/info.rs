use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::{Context, Result};

use molecool::{AtomSet, color_of, weight_of};

use super::read_structure;
use crate::cli::InfoArgs;
use crate::display::{
    CompositionRow, Context as DisplayContext, Progress, write_composition, write_summary,
};

const TOTAL_STEPS: u8 = 2;

pub fn run_info(args: InfoArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let atoms = read_structure(&args.input)?;
    let read_summary = format!("{} atoms", atoms.atom_count());
    progress.complete_step("Reading structure", &[read_summary.as_str()]);

    progress.step("Weighing atoms");
    let mass = atoms
        .molecular_mass()
        .context("Cannot compute molecular mass")?;
    let center = atoms
        .center_of_mass()
        .context("Cannot compute centre of mass")?;
    let composition = element_composition(&atoms)?;
    let weigh_summary = format!("{} elements, {mass:.5} amu", composition.len());
    progress.complete_step("Weighing atoms", &[weigh_summary.as_str()]);

    progress.finish();

    let mut out = io::stdout().lock();
    write_summary(&mut out, &atoms, mass, center).context("Failed to write summary")?;
    write_composition(&mut out, &composition, mass).context("Failed to write composition")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

fn element_composition(atoms: &AtomSet) -> Result<Vec<CompositionRow>> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for symbol in atoms.symbols() {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let mut rows = Vec::with_capacity(counts.len());
    for (symbol, count) in counts {
        let weight =
            weight_of(symbol).with_context(|| format!("Cannot weigh element '{symbol}'"))?;
        let color =
            color_of(symbol).with_context(|| format!("Cannot color element '{symbol}'"))?;
        rows.push(CompositionRow {
            symbol: symbol.to_string(),
            count,
            weight,
            color: color.as_str(),
        });
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.symbol.cmp(&b.symbol)));
    Ok(rows)
}
