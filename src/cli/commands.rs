//! CLI commands and argument parsing

use crate::config::ProviderKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch and page through news headlines
#[derive(Parser, Debug)]
#[command(name = "headline-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// News provider
    #[arg(short, long, global = true)]
    pub provider: Option<ProviderKind>,

    /// Country code (NewsAPI)
    #[arg(long, global = true)]
    pub country: Option<String>,

    /// Category (NewsAPI) or section (Guardian)
    #[arg(long, global = true)]
    pub category: Option<String>,

    /// Articles per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// API key (overrides the config file and NEWS_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Override the provider base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the first page of headlines
    Show,

    /// Page through headlines interactively (n = next, p = previous, q = quit)
    Browse,

    /// Print the effective configuration with the API key hidden
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one view per line)
    Json,
    /// Human-readable output
    Pretty,
}
