use clap::{Args, Parser};
use std::path::PathBuf;
use topgen::core::chemistry::Polymer;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "topgen - Generates MARTINI topologies (.itp) for coarse-grained linear homopolymer chains.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Number of monomers in the chain (at least 3)
    #[arg(value_name = "MONOMERS", required_unless_present = "list")]
    pub monomers: Option<usize>,

    /// Path of the topology file to write; created or truncated
    #[arg(value_name = "OUTPUT", required_unless_present = "list")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub source: TemplateSource,

    /// List the built-in polymers and exit
    #[arg(long, conflicts_with_all = ["monomers", "output", "polymer", "template"])]
    pub list: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Where the monomer template comes from. Defaults to the built-in PSS model.
#[derive(Args, Debug, Clone)]
#[group(required = false, multiple = false)]
pub struct TemplateSource {
    /// Built-in polymer to generate (pss, pdadma)
    #[arg(short, long, value_name = "NAME")]
    pub polymer: Option<Polymer>,

    /// Load the monomer template from a TOML file instead of a built-in polymer
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}
