use std::io::Write;

use anyhow::{Context, Result};

use molecool::{BondGraph, BondWindow, build_bond_graph, measure_bonded_angles};

use super::read_structure;
use crate::cli::BondsArgs;
use crate::config::build_analysis_config;
use crate::display::{
    Context as DisplayContext, Progress, print_bond_summary, print_structure_info, write_angle_list,
    write_bond_list,
};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 3;

pub fn run_bonds(args: BondsArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_analysis_config(&args.bonds, args.degrees)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let atoms = read_structure(&args.input)?;
    let atom_summary = format!("{} atoms", atoms.atom_count());
    progress.complete_step("Reading structure", &[atom_summary.as_str()]);

    if ctx.interactive {
        print_structure_info(&atoms);
    }

    progress.step("Inferring bonds");
    let graph = build_bond_graph(&atoms, &config.bonds);
    let angles = if args.angles {
        let measured = measure_bonded_angles(&atoms, &graph, config.angles.unit)
            .context("Failed to measure bond angles")?;
        Some(measured)
    } else {
        None
    };
    let infer_substeps =
        build_infer_substeps(&config.bonds, &graph, angles.as_ref().map(Vec::len));
    let infer_substeps_ref: Vec<&str> = infer_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Inferring bonds", &infer_substeps_ref);

    if ctx.interactive {
        print_bond_summary(&graph);
    }

    progress.step("Writing bond list");
    let mut out = create_output(args.output.as_deref())?;
    write_bond_list(&mut out, &atoms, &graph, &config.bonds)
        .context("Failed to write bond list")?;
    if let Some(angles) = &angles {
        write_angle_list(&mut out, &atoms, angles, config.angles.unit)
            .context("Failed to write angle list")?;
    }
    out.flush().context("Failed to flush output")?;

    let target = args
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    let write_summary = format!("→ {target}");
    progress.complete_step("Writing bond list", &[write_summary.as_str()]);

    progress.finish();

    Ok(())
}

fn build_infer_substeps(
    window: &BondWindow,
    graph: &BondGraph,
    angle_count: Option<usize>,
) -> Vec<String> {
    let mut steps = vec![
        format!("Window {} < d < {} Å", window.min_bond, window.max_bond),
        format!("{} bonds found", graph.len()),
    ];

    if window.is_empty() {
        steps.push("Window is empty: min-bond ≥ max-bond".to_string());
    }

    if let Some(count) = angle_count {
        steps.push(format!("{count} bond angles measured"));
    }

    steps
}
