use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::search::Strategy;

#[derive(Parser)]
#[command(name = "site-search")]
#[command(about = "Client-side page search and UI state, outside the browser", long_about = None)]
pub struct Cli {
    /// Site configuration file (TOML)
    #[arg(short, long, global = true, env = "SITE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against a page snapshot
    Search {
        query: String,
        /// Page snapshot (JSON)
        #[arg(short, long)]
        page: PathBuf,
        /// Override the configured scanning strategy
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
        /// Print the results container markup instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Replay timed keystrokes through the debounced search input
    Replay {
        /// Page snapshot (JSON)
        #[arg(short, long)]
        page: PathBuf,
        /// Successive input values, comma separated
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Milliseconds between keystrokes
        #[arg(short, long, default_value = "100")]
        interval_ms: u64,
    },
    /// Show or toggle the persisted theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
        /// Storage file overriding the configured location
        #[arg(long)]
        store: Option<PathBuf>,
        /// Treat the OS as preferring a dark color scheme
        #[arg(long)]
        prefers_dark: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}
