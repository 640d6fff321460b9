use clap::{Parser, Subcommand, ValueEnum};
use inspector_kernel::Universe;

#[derive(Parser)]
#[command(
    name = "inspector",
    about = "Inspector: classify runtime values and render them as indented, human-readable text",
    version
)]
pub struct Cli {
    /// Log classification decisions to stderr (overridden by INSPECTOR_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON document the way the inspector renders runtime values
    Show {
        /// Path to a JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Indent level of the outermost container
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        indent: i64,

        /// Path to an options TOML file
        #[arg(long)]
        config: Option<String>,

        /// Deepest nesting level rendered before failing
        #[arg(long)]
        max_depth: Option<usize>,

        /// Let the first matching kind win instead of the last
        #[arg(long)]
        first_match: bool,

        /// Backslash-escape quotes and backslashes inside strings
        #[arg(long)]
        escape_strings: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in kinds in declaration order
    Kinds {
        /// Only list one registry
        #[arg(long, value_enum)]
        universe: Option<UniverseArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UniverseArg {
    #[value(name = "platform")]
    Platform,
    #[value(name = "intrinsic")]
    Intrinsic,
}

impl From<UniverseArg> for Universe {
    fn from(arg: UniverseArg) -> Self {
        match arg {
            UniverseArg::Platform => Universe::Platform,
            UniverseArg::Intrinsic => Universe::Intrinsic,
        }
    }
}
