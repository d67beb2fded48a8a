//! Command-line interface definitions.
//!
//! Defines the `butcher` CLI using `clap`. Both live views (`dashboard` and
//! `screen`) drive the same feed controller; `show`, `stats`, and
//! `check config` are one-shot commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{parse_min_edge, SportFilter, TierFilter};

/// Player prop predictions, polled and carved up in the terminal
#[derive(Parser, Debug)]
#[command(name = "butcher")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file (defaults to ./butcher.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the butcher CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full dashboard: stats overview, filters, and the prediction table
    Dashboard(DashboardArgs),

    /// Compact card view; Enter refreshes, a tier name filters, q quits
    Screen(ScreenArgs),

    /// Show the full analysis for one prediction
    Show(ShowArgs),

    /// Print aggregates over the current feed
    Stats,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for `butcher dashboard`.
#[derive(Parser, Debug, Default)]
pub struct DashboardArgs {
    /// Only show this sport (e.g. nba, nfl, or all)
    #[arg(long)]
    pub sport: Option<SportFilter>,

    /// Only show this confidence tier (execution, demolition, meat, scrap, or all)
    #[arg(long)]
    pub tier: Option<TierFilter>,

    /// Minimum edge, as a fraction (0.2) or percentage (20%)
    #[arg(long, value_parser = parse_min_edge, allow_hyphen_values = true)]
    pub min_edge: Option<Decimal>,

    /// Render once after the first refresh and exit
    #[arg(long)]
    pub once: bool,
}

/// Arguments for `butcher screen`.
#[derive(Parser, Debug, Default)]
pub struct ScreenArgs {
    /// Initial confidence tier filter
    #[arg(long)]
    pub tier: Option<TierFilter>,

    /// Render once after the first refresh and exit
    #[arg(long)]
    pub once: bool,
}

/// Arguments for `butcher show`.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Prediction identifier (e.g. bb-001)
    pub id: String,
}

/// Subcommands for `butcher check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Optional positional config path, overriding `--config`.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
