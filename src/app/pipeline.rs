//! Shared "page model" used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating what the page shows:
//! profile copy -> simulator state + estimate -> static panels
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use serde::Serialize;

use crate::config::Config;
use crate::data::{KpiPoint, Profile, SKILLS, STORIES, Skill, Story, live_series};
use crate::domain::{Organization, SimulationInput, SimulationResult};
use crate::state::SimulatorState;

/// Everything one render of the page needs.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub profile: Profile,
    pub org: Organization,
    pub input: SimulationInput,
    pub result: SimulationResult,
    pub skills: &'static [Skill],
    pub kpis: Vec<KpiPoint>,
    pub stories: &'static [Story],
    /// Year printed in the footer.
    pub year: i32,
}

impl PageSnapshot {
    pub fn capture(state: &SimulatorState, config: &Config, year: i32) -> Self {
        Self {
            profile: config.profile.clone(),
            org: state.org(),
            input: state.input(),
            result: state.result(),
            skills: &SKILLS,
            kpis: live_series(),
            stories: &STORIES,
            year,
        }
    }
}

/// Machine-readable estimator output (`portfolio estimate --json`).
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub organization: Organization,
    pub input: SimulationInput,
    pub result: SimulationResult,
    /// ROI formatted with one decimal, as displayed.
    pub roi_label: String,
}

impl EstimateReport {
    pub fn from_state(state: &SimulatorState) -> Self {
        let result = state.result();
        Self {
            organization: state.org(),
            input: state.input(),
            result,
            roi_label: result.roi_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_state() {
        let mut state = SimulatorState::default();
        state.enter_text(crate::domain::InputField::AutomationLevel, "100");
        let snap = PageSnapshot::capture(&state, &Config::default(), 2026);
        assert_eq!(snap.result.roi_label(), "4.0");
        assert_eq!(snap.kpis.len(), 12);
        assert_eq!(snap.stories.len(), 3);
        assert_eq!(snap.year, 2026);
    }

    #[test]
    fn estimate_report_serializes_numeric_outputs() {
        let report = EstimateReport::from_state(&SimulatorState::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["organization"], "university");
        assert_eq!(json["result"]["hours_saved"], 37.0);
        assert_eq!(json["roi_label"], "3.2");
    }
}
