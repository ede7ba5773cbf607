//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// wordwarn - Highlight words by their length
#[derive(Parser)]
#[command(name = "wordwarn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wrap words in the length range in marker elements
    Apply {
        /// HTML or plain text file
        file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,

        /// Remove existing markers first
        #[arg(long)]
        reset: bool,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace every marker with its plain text
    Remove {
        /// HTML file
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the words that would be highlighted
    Scan {
        /// HTML or plain text file
        file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Highlight options given on the command line. Each one overrides the
/// configuration file.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Lower length bound
    #[arg(long = "min", value_name = "N")]
    pub min_length: Option<u64>,

    /// Upper length bound [default: 80]
    #[arg(long = "max", value_name = "N")]
    pub max_length: Option<u64>,

    /// Exclude words of exactly --min or --max characters
    #[arg(long)]
    pub exclusive: bool,

    /// Marker background color [default: hotpink]
    #[arg(long, value_name = "COLOR")]
    pub highlight_color: Option<String>,

    /// Marker text color [default: white]
    #[arg(long, value_name = "COLOR")]
    pub text_color: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
