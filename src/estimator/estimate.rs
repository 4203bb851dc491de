//! Estimator formulas plus the two numeric helpers they depend on.
//!
//! All derived outputs are linear in the automation factor:
//! - hours saved: 25%..60% of the baseline
//! - visibility lift: 20%..50%
//! - ROI: 2.0x..4.0x
//!
//! Inputs are not validated here; callers own the input contract
//! (see `state::entry`).

use crate::domain::{SimulationInput, SimulationResult};

/// Share of baseline hours saved at zero automation.
pub const SAVED_SHARE_FLOOR: f64 = 0.25;
/// Extra share of baseline hours saved at full automation.
pub const SAVED_SHARE_SLOPE: f64 = 0.35;
/// Visibility lift (percent) at zero automation.
pub const LIFT_FLOOR: f64 = 20.0;
/// Extra visibility lift (percent) at full automation.
pub const LIFT_SLOPE: f64 = 30.0;
/// ROI multiplier at zero automation.
pub const ROI_FLOOR: f64 = 2.0;
/// Extra ROI multiplier at full automation.
pub const ROI_SLOPE: f64 = 2.0;

/// Compute all four derived statistics from the current input.
pub fn estimate(input: &SimulationInput) -> SimulationResult {
    let baseline_hours = input.reports_per_month * input.hours_per_report;
    let factor = automation_factor(input.automation_level);

    SimulationResult {
        baseline_hours,
        hours_saved: round_half_up(baseline_hours * saved_share(factor)),
        visibility_lift: round_half_up(LIFT_FLOOR + LIFT_SLOPE * factor),
        roi: ROI_FLOOR + ROI_SLOPE * factor,
    }
}

/// Normalized automation level; in `[0, 1]` for in-range input.
pub fn automation_factor(automation_level: f64) -> f64 {
    automation_level / 100.0
}

/// Fraction of baseline hours saved for the given automation factor.
pub fn saved_share(factor: f64) -> f64 {
    SAVED_SHARE_FLOOR + SAVED_SHARE_SLOPE * factor
}

/// Round to the nearest integer, with exact halves going towards +infinity.
///
/// This is the browser's `Math.round`, which differs from `f64::round` for
/// negative halves (`-2.5` rounds to `-2`, not `-3`).
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Format with exactly one decimal, like `Number.prototype.toFixed(1)`.
///
/// Rust's `{:.1}` already rounds on the exact binary value, which agrees with
/// `toFixed` except on exact ties (`x.x5` with a finite binary expansion,
/// i.e. multiples of 0.25). There `{:.1}` picks the even digit while
/// `toFixed` rounds away from zero.
pub fn format_fixed_1(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if !is_tie {
        return format!("{value:.1}");
    }

    let tenths = (value.abs() * 10.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}
