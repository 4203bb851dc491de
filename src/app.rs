//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads configuration and installs logging
//! - builds the simulator state from the requested inputs
//! - prints reports or launches the TUI

use std::io::Write;

use chrono::Datelike;
use clap::Parser;
use tracing::info;

use crate::cli::{Command, EstimateArgs, KpisArgs, ShowArgs, SimArgs};
use crate::config::Config;
use crate::domain::InputField;
use crate::error::AppError;
use crate::state::SimulatorState;

pub mod pipeline;

/// Entry point for the `portfolio` binary.
pub fn run() -> Result<(), AppError> {
    // We want `portfolio` and `portfolio -a 80` to behave like `portfolio tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let config = Config::from_env()?;
    crate::logging::init_logging(&config.log_filter);
    info!(owner = %config.profile.owner, accent = %config.theme.accent.to_hex(), "configuration loaded");

    match cli.command {
        Command::Tui(args) => handle_tui(&args, config),
        Command::Estimate(args) => handle_estimate(&args),
        Command::Show(args) => handle_show(&args, &config),
        Command::Kpis(args) => handle_kpis(&args),
    }
}

fn handle_tui(args: &SimArgs, config: Config) -> Result<(), AppError> {
    crate::tui::run(state_from_args(args), config)
}

fn handle_estimate(args: &EstimateArgs) -> Result<(), AppError> {
    let state = state_from_args(&args.sim);

    if args.json {
        let report = pipeline::EstimateReport::from_state(&state);
        return print_out(&serde_json::to_string_pretty(&report)?);
    }

    print_out(&crate::report::format_estimate(
        state.org(),
        &state.input(),
        &state.result(),
    ))
}

fn handle_show(args: &ShowArgs, config: &Config) -> Result<(), AppError> {
    let state = state_from_args(&args.sim);
    let page = pipeline::PageSnapshot::capture(&state, config, current_year());
    print_out(&crate::report::format_page(&page, args.width, args.height))
}

fn handle_kpis(args: &KpisArgs) -> Result<(), AppError> {
    let series = crate::data::live_series();
    if args.json {
        return print_out(&serde_json::to_string_pretty(&series)?);
    }
    print_out(&crate::report::format_kpi_table(&series))
}

/// Build simulator state the way the playground fields would.
pub fn state_from_args(args: &SimArgs) -> SimulatorState {
    let mut state = SimulatorState::default();
    state.set_org(args.org);
    state.enter_text(InputField::ReportsPerMonth, &args.reports);
    state.enter_text(InputField::HoursPerReport, &args.hours);
    state.enter_text(InputField::AutomationLevel, &args.automation);
    state
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn print_out(text: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end())
        .map_err(|e| AppError::new(4, format!("Failed to write output: {e}")))
}

/// Rewrite argv so `portfolio` defaults to `portfolio tui`.
///
/// Rules:
/// - `portfolio`                      -> `portfolio tui`
/// - `portfolio -a 80 ...`            -> `portfolio tui -a 80 ...`
/// - `portfolio --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "estimate" | "show" | "kpis");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
