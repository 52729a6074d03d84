use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod ui;

#[derive(Parser)]
#[command(
    name = "gr1spec",
    about = "Compiles reactive-agent models into GR(1) specifications for controller synthesis",
    version,
    author,
    long_about = None
)]
pub struct Gr1SpecCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a specification and write it to disk
    Build {
        #[command(flatten)]
        spec: SpecArgs,

        /// Directory the specification folder is created in
        #[arg(short, long, default_value = "specifications")]
        output: PathBuf,
    },

    /// Build a specification and print it to stdout
    Preview {
        #[command(flatten)]
        spec: SpecArgs,
    },
}

#[derive(Args)]
pub struct SpecArgs {
    /// Name of the specification (also names the output folder)
    #[arg(short, long)]
    pub name: String,

    /// Agent whose configuration file is loaded (<agent>_config.yaml)
    #[arg(short, long)]
    pub agent: String,

    /// Directory containing agent configuration files
    #[arg(short, long, default_value = "config")]
    pub config_dir: PathBuf,

    /// Goal propositions, in order
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub goals: Vec<String>,

    /// Base propositions that are initially true
    #[arg(short, long, value_delimiter = ',')]
    pub initial_conditions: Vec<String>,

    /// Possible outcomes of activating an action
    #[arg(long, value_delimiter = ',', default_values_t = ["completed".to_string(), "failed".to_string()])]
    pub action_outcomes: Vec<String>,

    /// State machine outcomes: success, optionally followed by failure
    #[arg(long, value_delimiter = ',', default_values_t = ["finished".to_string(), "failed".to_string()])]
    pub sm_outcomes: Vec<String>,

    /// Regions of the transition system to include (all when omitted)
    #[arg(short, long, value_delimiter = ',')]
    pub regions: Vec<String>,

    /// Require the goals to be achieved in the order given
    #[arg(long, default_value = "false")]
    pub strict_order: bool,
}
