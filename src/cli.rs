use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::{Difficulty, SearchIntent};
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "keywordmap")]
#[command(about = "Synthetic keyword research and SEO metrics explorer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a keyword: metrics plus ranked suggestions
    Analyze {
        /// Keyword to analyze
        keyword: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fixed seed for reproducible output
        #[arg(long, env = "KEYWORDMAP_SEED")]
        seed: Option<u64>,

        /// Skip the simulated backend latency
        #[arg(long = "no-delay")]
        no_delay: bool,

        /// Show only the top N suggestions
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Generate suggestions only, with filtering and pagination
    Suggest {
        /// Base keyword to expand
        keyword: String,

        /// Keep only suggestions containing this text (case-insensitive)
        #[arg(long = "filter")]
        filter: Option<String>,

        /// Keep only suggestions of this difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Keep only suggestions with this intent (informational, transactional, navigational, commercial)
        #[arg(long)]
        intent: Option<SearchIntent>,

        /// 1-based page to show
        #[arg(long, default_value = "1")]
        page: usize,

        /// Suggestions per page
        #[arg(long = "page-size")]
        page_size: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fixed seed for reproducible output
        #[arg(long, env = "KEYWORDMAP_SEED")]
        seed: Option<u64>,

        /// Skip the simulated backend latency
        #[arg(long = "no-delay")]
        no_delay: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Interactive dashboard
    Tui {
        /// Keyword to analyze on startup
        keyword: Option<String>,

        /// Fixed seed for reproducible output
        #[arg(long, env = "KEYWORDMAP_SEED")]
        seed: Option<u64>,

        /// Skip the simulated backend latency
        #[arg(long = "no-delay")]
        no_delay: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
