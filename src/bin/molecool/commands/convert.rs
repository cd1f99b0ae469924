use anyhow::{Context, Result, bail};

use molecool::io::{Format, StructureWriter};

use super::read_structure;
use crate::cli::ConvertArgs;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::{create_output, infer_output_format, stdout_is_tty};

const TOTAL_STEPS: u8 = 2;

pub fn run_convert(args: ConvertArgs, ctx: DisplayContext) -> Result<()> {
    let output_format = resolve_output_format(&args)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let mut atoms = read_structure(&args.input)?;
    let read_summary = format!("{} atoms", atoms.atom_count());
    progress.complete_step("Reading structure", &[read_summary.as_str()]);

    if let Some(comment) = args.comment {
        atoms.comment = comment;
    }

    progress.step("Writing output");
    let writer = create_output(args.output.as_deref())?;
    StructureWriter::new(writer, output_format)
        .write(&atoms)
        .context("Failed to write structure file")?;

    let path_str = args
        .output
        .as_ref()
        .map(|p| {
            p.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| "stdout".to_string());
    let write_summary = format!("Write {output_format} → {path_str}");
    progress.complete_step("Writing output", &[write_summary.as_str()]);

    progress.finish();

    Ok(())
}

fn resolve_output_format(args: &ConvertArgs) -> Result<Format> {
    if let Some(fmt) = args.output_format {
        return Ok(fmt.into());
    }

    match &args.output {
        Some(path) => infer_output_format(path).with_context(|| {
            format!(
                "Cannot infer format from '{}'. Use --outfmt to specify.",
                path.display()
            )
        }),
        None => {
            if stdout_is_tty() {
                bail!(
                    "No output file specified and stdout is a terminal.\n\nUsage: molecool convert -i <INPUT> -o <OUTPUT> or pipe output."
                );
            }
            Ok(Format::Xyz)
        }
    }
}
