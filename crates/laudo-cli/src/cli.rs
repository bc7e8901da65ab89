use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "laudo",
    version,
    about = "BI-RADS® and PI-RADS® classification and report generation"
)]
pub struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the classification of a case as JSON.
    Classify(CaseArgs),

    /// Print the narrative report of a case.
    Report {
        #[command(flatten)]
        case: CaseArgs,

        /// Only findings, impression and recommendation.
        #[arg(long)]
        summary: bool,

        /// Minimal HTML instead of plain text.
        #[arg(long, conflicts_with = "plain")]
        html: bool,

        /// Plain text, regardless of the configured default.
        #[arg(long)]
        plain: bool,
    },

    /// List the catalog options of one key.
    Options {
        /// `birads` or `pirads`.
        #[arg(long)]
        scale: String,

        /// Catalog key, e.g. `density` or `zone`.
        #[arg(long)]
        key: String,

        /// Live catalog JSON.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct CaseArgs {
    /// Case JSON file. Read from stdin when omitted.
    #[arg(long)]
    pub case: Option<PathBuf>,

    /// Live catalog JSON, layered over the built-in options.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// PI-RADS® guideline version ("2.1" or "2").
    #[arg(long)]
    pub guideline: Option<String>,

    /// Reference date for follow-up intervals (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long)]
    pub today: Option<String>,
}

/// Show or initialize the config file.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Init,
}
