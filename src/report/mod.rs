//! Reporting utilities: stat cards and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::SimulationResult;
use crate::state::entry::display_value;

/// One statistic tile (label, headline value, optional caption).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub sub: Option<&'static str>,
}

impl StatCard {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value, sub: None }
    }

    fn with_sub(mut self, sub: &'static str) -> Self {
        self.sub = Some(sub);
        self
    }
}

/// The four cards under the simulator controls.
pub fn simulator_cards(result: &SimulationResult) -> [StatCard; 4] {
    [
        StatCard::new("Baseline monthly hours", format!("{}h", display_value(result.baseline_hours))),
        StatCard::new("Hours saved", format!("{}h", display_value(result.hours_saved)))
            .with_sub("via automation & templates"),
        StatCard::new("Decision visibility lift", format!("{}%", display_value(result.visibility_lift))),
        StatCard::new("Projected ROI", format!("{}×", result.roi_label())),
    ]
}

/// The two cards beside the playground fields.
pub fn playground_cards(result: &SimulationResult) -> [StatCard; 2] {
    [
        StatCard::new("Projected save", format!("{}h/mo", display_value(result.hours_saved))),
        StatCard::new("ROI", format!("{}×", result.roi_label())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SimulationInput;
    use crate::estimator::estimate;

    #[test]
    fn cards_use_page_suffixes() {
        let result = estimate(&SimulationInput::default());
        let cards = simulator_cards(&result);
        assert_eq!(cards[0].value, "80h");
        assert_eq!(cards[1].value, "37h");
        assert_eq!(cards[1].sub, Some("via automation & templates"));
        assert_eq!(cards[2].value, "38%");
        assert_eq!(cards[3].value, "3.2×");

        let cards = playground_cards(&result);
        assert_eq!(cards[0].value, "37h/mo");
        assert_eq!(cards[1].value, "3.2×");
    }

    #[test]
    fn fractional_baseline_is_shown_unrounded() {
        let result = estimate(&SimulationInput::new(3.0, 1.5, 0.0));
        assert_eq!(simulator_cards(&result)[0].value, "4.5h");
    }
}
