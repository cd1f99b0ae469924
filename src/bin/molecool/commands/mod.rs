mod angle;
mod bonds;
mod convert;
mod info;

use angle::run_angle;
use bonds::run_bonds;
use convert::run_convert;
use info::run_info;

use anyhow::{Context, Result, bail};

use molecool::AtomSet;
use molecool::io::{Format, StructureReader};

use crate::cli::{Command, InputOptions};
use crate::display::Context as DisplayContext;
use crate::io::{infer_input_format, open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Bonds(args) => run_bonds(args, ctx),
        Command::Angle(args) => run_angle(args, ctx),
        Command::Info(args) => run_info(args, ctx),
        Command::Convert(args) => run_convert(args, ctx),
    }
}

fn resolve_input_format(opts: &InputOptions) -> Result<Format> {
    if let Some(fmt) = opts.input_format {
        return Ok(fmt.into());
    }

    if let Some(path) = &opts.input {
        if let Some(fmt) = infer_input_format(path) {
            return Ok(fmt);
        }
        bail!(
            "Cannot infer format from '{}'. Use --infmt to specify.",
            path.display()
        );
    }

    bail!("Reading from stdin requires --infmt");
}

fn read_structure(opts: &InputOptions) -> Result<AtomSet> {
    if opts.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: molecool <COMMAND> -i <INPUT> or pipe data via stdin."
        );
    }

    let format = resolve_input_format(opts)?;
    let input = open_input(opts.input.as_deref())?;
    let atoms = StructureReader::new(input, format)
        .read()
        .with_context(|| format!("Failed to read {format} structure"))?;

    log::info!("read {} atoms ({format})", atoms.atom_count());
    Ok(atoms)
}
