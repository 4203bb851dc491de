//! Command-line parsing for the portfolio dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the estimator and presentation code.

use clap::{Args, Parser, Subcommand};

use crate::domain::Organization;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Analytics portfolio dashboard with an automation-gain simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard.
    ///
    /// Sliders and playground fields edit the same simulator inputs; every
    /// change recomputes the estimate.
    Tui(SimArgs),
    /// Print the simulator estimate for the given inputs.
    Estimate(EstimateArgs),
    /// Print the whole portfolio page as text.
    Show(ShowArgs),
    /// Print the generated KPI series.
    Kpis(KpisArgs),
}

/// Simulator inputs.
///
/// Values are taken as free text and resolved like the playground fields:
/// non-numeric text becomes 0 and the automation level is clamped to 0..=100.
#[derive(Debug, Args, Clone)]
pub struct SimArgs {
    /// Organization shown in the simulator pitch.
    #[arg(long, value_enum, default_value_t = Organization::University)]
    pub org: Organization,

    /// Manual reports per month.
    #[arg(short = 'r', long, default_value = "40", allow_hyphen_values = true)]
    pub reports: String,

    /// Average hours per report.
    #[arg(short = 'H', long, default_value = "2", allow_hyphen_values = true)]
    pub hours: String,

    /// Automation level in percent.
    #[arg(short = 'a', long, default_value = "60", allow_hyphen_values = true)]
    pub automation: String,
}

#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub sim: SimArgs,

    /// KPI plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// KPI plot height (rows).
    #[arg(long, default_value_t = 12)]
    pub height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct KpisArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}
