//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - fed to the estimator on every input change
//! - printed as JSON by `portfolio estimate --json`
//! - rendered by the TUI without extra conversion

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default reports per month (page load state).
pub const DEFAULT_REPORTS_PER_MONTH: f64 = 40.0;
/// Default hours per report (page load state).
pub const DEFAULT_HOURS_PER_REPORT: f64 = 2.0;
/// Default automation level in percent (page load state).
pub const DEFAULT_AUTOMATION_LEVEL: f64 = 60.0;

/// The three user-adjustable quantities feeding the estimator.
///
/// Values are `f64` because the numeric fields accept fractional entries;
/// the sliders only ever produce whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub reports_per_month: f64,
    pub hours_per_report: f64,
    /// Percentage, nominally in `[0, 100]`.
    pub automation_level: f64,
}

impl SimulationInput {
    pub fn new(reports_per_month: f64, hours_per_report: f64, automation_level: f64) -> Self {
        Self {
            reports_per_month,
            hours_per_report,
            automation_level,
        }
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::ReportsPerMonth => self.reports_per_month,
            InputField::HoursPerReport => self.hours_per_report,
            InputField::AutomationLevel => self.automation_level,
        }
    }

    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::ReportsPerMonth => self.reports_per_month = value,
            InputField::HoursPerReport => self.hours_per_report = value,
            InputField::AutomationLevel => self.automation_level = value,
        }
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self::new(
            DEFAULT_REPORTS_PER_MONTH,
            DEFAULT_HOURS_PER_REPORT,
            DEFAULT_AUTOMATION_LEVEL,
        )
    }
}

/// The four derived statistics shown to the user.
///
/// All fields are numeric; formatting (unit suffixes, the one-decimal ROI)
/// happens at presentation time via the `*_label` helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Exact `reports × hours`, never rounded.
    pub baseline_hours: f64,
    /// Rounded half-up to a whole number of hours.
    pub hours_saved: f64,
    /// Rounded half-up to a whole percentage.
    pub visibility_lift: f64,
    /// Multiplier, unclamped (`> 4.0` when automation exceeds 100).
    pub roi: f64,
}

impl SimulationResult {
    /// ROI with fixed one-decimal precision, e.g. `"3.2"`.
    pub fn roi_label(&self) -> String {
        crate::estimator::format_fixed_1(self.roi)
    }
}

/// Which simulator quantity a control is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    ReportsPerMonth,
    HoursPerReport,
    AutomationLevel,
}

impl InputField {
    pub const ALL: [InputField; 3] = [
        InputField::ReportsPerMonth,
        InputField::HoursPerReport,
        InputField::AutomationLevel,
    ];

    /// Label used next to the simulator slider.
    pub fn slider_label(self) -> &'static str {
        match self {
            InputField::ReportsPerMonth => "Reports per month",
            InputField::HoursPerReport => "Hours per report",
            InputField::AutomationLevel => "Automation level",
        }
    }

    /// Label used above the playground numeric field.
    pub fn field_label(self) -> &'static str {
        match self {
            InputField::ReportsPerMonth => "Manual reports/month",
            InputField::HoursPerReport => "Avg hours/report",
            InputField::AutomationLevel => "Automation level (%)",
        }
    }

    /// Unit suffix shown under the slider (`"2 hrs"`, `"60%"`).
    pub fn value_suffix(self) -> &'static str {
        match self {
            InputField::ReportsPerMonth => "",
            InputField::HoursPerReport => " hrs",
            InputField::AutomationLevel => "%",
        }
    }

    /// Range configured on the slider bound to this field.
    pub fn slider(self) -> SliderSpec {
        match self {
            InputField::ReportsPerMonth => SliderSpec::new(10.0, 200.0),
            InputField::HoursPerReport => SliderSpec::new(1.0, 8.0),
            InputField::AutomationLevel => SliderSpec::new(0.0, 100.0),
        }
    }
}

/// A range slider's configured bounds (step is always 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
}

impl SliderSpec {
    pub const STEP: f64 = 1.0;

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Where the thumb sits for `value`; out-of-range values pin to a bound.
    pub fn position(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Thumb position as a fraction of the track, in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.position(value) - self.min) / span
    }
}

/// Organization dropdown on the simulator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Organization {
    #[default]
    University,
    Healthcare,
    PublicTransport,
    Tech,
    Retail,
}

impl Organization {
    pub const ALL: [Organization; 5] = [
        Organization::University,
        Organization::Healthcare,
        Organization::PublicTransport,
        Organization::Tech,
        Organization::Retail,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Organization::University => "University",
            Organization::Healthcare => "Healthcare",
            Organization::PublicTransport => "Public Transport",
            Organization::Tech => "Tech",
            Organization::Retail => "Retail",
        }
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }
}
