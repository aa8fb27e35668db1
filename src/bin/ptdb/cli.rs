use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use periodically::{Block, Phase};

#[derive(Parser)]
#[command(
    name = "ptdb",
    about = "Chemical elements and reactions reference database",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by all commands.
#[derive(Args)]
pub struct GlobalOptions {
    /// Database root directory
    #[arg(long, value_name = "DIR", default_value = "data", global = true)]
    pub root: PathBuf,

    /// Configuration file (embedded defaults if omitted)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the full record of one element
    #[command(visible_alias = "e")]
    Element(ElementArgs),

    /// Find elements matching property and classification filters
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// List reactions, optionally filtered
    #[command(visible_alias = "r")]
    Reactions(ReactionsArgs),

    /// Compare elements side by side
    #[command(visible_alias = "c")]
    Compare(CompareArgs),

    /// Database summary statistics
    Stats,

    /// Regenerate the periodic-table, category and property indexes
    Index,

    /// Regenerate the reaction index and the reactions embedded in elements
    Link,

    /// Validate every record and derived file
    #[command(visible_alias = "check")]
    Validate,
}

impl Command {
    /// Only the long-running maintenance commands greet with a banner.
    pub fn shows_banner(&self) -> bool {
        matches!(self, Self::Index | Self::Link | Self::Validate)
    }
}

#[derive(Args)]
pub struct ElementArgs {
    /// Atomic number, symbol or name (e.g. 26, Fe, iron)
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,
}

#[derive(Args)]
#[command(next_help_heading = "Filters")]
pub struct SearchArgs {
    /// Keep elements whose property is strictly greater (e.g. melting_point=3000)
    #[arg(long, value_name = "PROPERTY=VALUE")]
    pub above: Option<String>,

    /// Keep elements whose property is strictly less
    #[arg(long, value_name = "PROPERTY=VALUE")]
    pub below: Option<String>,

    /// Exact classification category (e.g. "transition metal")
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Phase at standard temperature and pressure
    #[arg(long, value_name = "PHASE")]
    pub phase: Option<PhaseArg>,

    /// Periodic table block
    #[arg(long, value_name = "BLOCK")]
    pub block: Option<BlockArg>,

    /// Radioactivity (true/false, yes/no, 1/0)
    #[arg(long, value_name = "BOOL")]
    pub radioactive: Option<String>,
}

#[derive(Args)]
#[command(next_help_heading = "Filters")]
pub struct ReactionsArgs {
    /// Element symbol the reaction must involve (case-insensitive)
    #[arg(long, value_name = "SYMBOL")]
    pub element: Option<String>,

    /// Exact reaction category (e.g. industrial)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Exact reaction type (e.g. combustion)
    #[arg(long = "type", value_name = "TYPE")]
    pub reaction_type: Option<String>,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Element identifiers to compare
    #[arg(value_name = "IDENTIFIER", num_args = 1.., required = true)]
    pub identifiers: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PhaseArg {
    Solid,
    Liquid,
    Gas,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Solid => Phase::Solid,
            PhaseArg::Liquid => Phase::Liquid,
            PhaseArg::Gas => Phase::Gas,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BlockArg {
    S,
    P,
    D,
    F,
}

impl From<BlockArg> for Block {
    fn from(arg: BlockArg) -> Self {
        match arg {
            BlockArg::S => Block::S,
            BlockArg::P => Block::P,
            BlockArg::D => Block::D,
            BlockArg::F => Block::F,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
