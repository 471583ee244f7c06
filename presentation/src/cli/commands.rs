//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for meeting results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Outcome, decisions and action items
    Summary,
    /// Full transcript, decisions and roster statistics
    Full,
    /// JSON output
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Summary => OutputFormat::Summary,
            CliOutputFormat::Full => OutputFormat::Full,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for council
#[derive(Parser, Debug)]
#[command(name = "council")]
#[command(author, version, about = "Weighted-quorum deliberation engine")]
#[command(long_about = r#"
Council runs a meeting of ten weighted participants on one agenda and
records the decision.

The meeting moves through fixed phases:
1. Opening and brainstorming: participants pitch ideas; the first becomes the proposal
2. Discussion: every participant comments on the proposal
3. Evaluation: the critic's evaluation must pass a content gate
4. Voting: weighted votes, approved at 60% with a quorum of 7 voters

Configuration files are loaded from (in priority order):
1. COUNCIL_* environment variables
2. --config <path>          Explicit config file
3. ./council.toml           Project-level config
4. ~/.config/council/config.toml   Global config

Example:
  council "Choose our next internal product"
  council --offline -o full "Choose our next internal product"
  council -o json --session-id weekly_sync "Quarterly roadmap"
"#)]
pub struct Cli {
    /// The meeting agenda
    pub agenda: Option<String>,

    /// Session id (default: meeting_YYYYMMDD_HHMMSS)
    #[arg(long, value_name = "ID")]
    pub session_id: Option<String>,

    /// Output format (default: from config, else summary)
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Use the offline template generator regardless of configuration
    #[arg(long)]
    pub offline: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
