use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use molecool::io::Format;

#[derive(Parser)]
#[command(
    name = "molecool",
    about = "Molecular geometry toolkit: distances, angles and bond inference",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Infer bonds from interatomic distances
    #[command(visible_alias = "b")]
    Bonds(BondsArgs),

    /// Measure the angle at a vertex atom
    #[command(visible_alias = "a")]
    Angle(AngleArgs),

    /// Summarize composition, molecular mass and centre of mass
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Rewrite a structure as XYZ
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Bonds(args) => args.input.quiet,
            Command::Angle(args) => args.input.quiet,
            Command::Info(args) => args.input.quiet,
            Command::Convert(args) => args.input.quiet,
        }
    }
}

/// Input options shared by all commands.
#[derive(Args)]
pub struct InputOptions {
    /// Input file (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Bond window options.
#[derive(Args)]
#[command(next_help_heading = "Bond Detection")]
pub struct BondOptions {
    /// Exclusive lower bound on bond length (Å) [default: 0.0]
    #[arg(long = "min-bond", value_name = "Å", allow_hyphen_values = true)]
    pub min_bond: Option<f64>,

    /// Exclusive upper bound on bond length (Å) [default: 1.5]
    #[arg(long = "max-bond", value_name = "Å", allow_hyphen_values = true)]
    pub max_bond: Option<f64>,

    /// Analysis settings file (TOML); flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct BondsArgs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub bonds: BondOptions,

    /// Also list the angle at every atom with two or more bonds
    #[arg(long)]
    pub angles: bool,

    /// Report angles in degrees instead of radians
    #[arg(long)]
    pub degrees: bool,
}

#[derive(Args)]
pub struct AngleArgs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Index of the first endpoint atom (0-based)
    #[arg(value_name = "A")]
    pub first: usize,

    /// Index of the vertex atom (0-based)
    #[arg(value_name = "VERTEX")]
    pub vertex: usize,

    /// Index of the last endpoint atom (0-based)
    #[arg(value_name = "C")]
    pub last: usize,

    /// Report the angle in degrees instead of radians
    #[arg(long)]
    pub degrees: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub input: InputOptions,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Replace the comment line of the written file
    #[arg(long, value_name = "TEXT")]
    pub comment: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// XYZ coordinate file
    Xyz,
    /// Protein Data Bank ATOM/HETATM records
    Pdb,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// XYZ coordinate file
    Xyz,
}

impl From<InputFormat> for Format {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Xyz => Format::Xyz,
            InputFormat::Pdb => Format::Pdb,
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Xyz => Format::Xyz,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
