use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

impl OutputFormat {
    /// Pick the effective format: `--json`, then `--format`, then the config file.
    pub fn resolve(json: bool, explicit: Option<Self>, configured: Option<Self>) -> Self {
        if json {
            Self::Json
        } else {
            explicit.or(configured).unwrap_or_default()
        }
    }
}

#[derive(Parser)]
#[command(name = "eol")]
#[command(about = "Query product lifecycle data from endoflife.date", version)]
#[command(after_help = "EXAMPLES:
    eol products                      List every tracked product
    eol products --matching '^py'     List products matching a regex
    eol cycles python                 Show all Python release cycles
    eol cycles ubuntu --active        Show Ubuntu cycles that are not EOL
    eol cycle nodejs 20               Show a single cycle")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// API base URL, e.g. a mirror (must end with '/')
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all products
    #[command(
        alias = "p",
        after_help = "EXAMPLES:
    eol products
    eol products --matching 'linux'
    eol products --json"
    )]
    Products {
        /// Only show products matching this regular expression
        #[arg(long, short)]
        matching: Option<String>,
    },
    /// List release cycles of a product
    #[command(
        alias = "c",
        after_help = "EXAMPLES:
    eol cycles python
    eol cycles nodejs --active
    eol cycles ubuntu -o compact"
    )]
    Cycles(CyclesArgs),
    /// Show a single release cycle
    #[command(after_help = "EXAMPLES:
    eol cycle python 3.11
    eol cycle ubuntu 22.04 --json")]
    Cycle {
        /// Product name (e.g., python)
        product: String,
        /// Cycle identifier (e.g., 3.11)
        cycle: String,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    eol completions bash > ~/.bash_completion.d/eol
    eol completions zsh > ~/.zfunc/_eol
    eol completions fish > ~/.config/fish/completions/eol.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Clone)]
pub struct CyclesArgs {
    /// Product name (e.g., python)
    pub product: String,

    /// Hide cycles that have reached end of life
    #[arg(long)]
    pub active: bool,
}
