//! The shared simulator state and its numeric-field adapter.

use tracing::debug;

use crate::domain::{InputField, Organization, SimulationInput, SimulationResult};
use crate::estimator::estimate;
use crate::state::entry::{display_value, nudge_slider, resolve_entry};

/// Single source of truth behind the simulator and the playground.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatorState {
    input: SimulationInput,
    org: Organization,
}

impl SimulatorState {
    pub fn new(input: SimulationInput, org: Organization) -> Self {
        Self { input, org }
    }

    pub fn input(&self) -> SimulationInput {
        self.input
    }

    pub fn value(&self, field: InputField) -> f64 {
        self.input.get(field)
    }

    pub fn org(&self) -> Organization {
        self.org
    }

    pub fn set_org(&mut self, org: Organization) {
        self.org = org;
    }

    /// Step the dropdown forward (`forward = true`) or back.
    pub fn cycle_org(&mut self, forward: bool) {
        self.org = if forward { self.org.next() } else { self.org.prev() };
    }

    /// Store a value as-is. Both adapters funnel through here.
    pub fn set(&mut self, field: InputField, value: f64) {
        self.input.set(field, value);
        debug!(?field, value, "simulator input changed");
    }

    /// Slider adapter: move `field` by whole steps within its slider range.
    pub fn nudge_slider(&mut self, field: InputField, steps: i32) -> f64 {
        let next = nudge_slider(field.slider(), self.value(field), steps);
        self.set(field, next);
        next
    }

    /// Slider adapter: jump to the low (`to_max = false`) or high bound.
    pub fn jump_slider(&mut self, field: InputField, to_max: bool) -> f64 {
        let spec = field.slider();
        let next = if to_max { spec.max } else { spec.min };
        self.set(field, next);
        next
    }

    /// Numeric-field adapter: resolve free text and store the result.
    pub fn enter_text(&mut self, field: InputField, text: &str) -> f64 {
        let value = resolve_entry(field, text);
        self.set(field, value);
        value
    }

    /// Recompute the derived statistics from the current input.
    ///
    /// Nothing is cached; every call runs the estimator.
    pub fn result(&self) -> SimulationResult {
        estimate(&self.input)
    }

    /// Restore the page-load defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("simulator state reset");
    }
}

/// Editable text of one playground field.
///
/// While the user types, the draft keeps their text; every keystroke is
/// committed into the shared state. When the state changes from elsewhere
/// (a slider, a reset) or the committed value differs from what was typed
/// (clamping), the draft re-syncs to the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    pub field: InputField,
    text: String,
}

impl NumericField {
    pub fn new(field: InputField, state: &SimulatorState) -> Self {
        Self {
            field,
            text: display_value(state.value(field)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, c: char, state: &mut SimulatorState) {
        self.text.push(c);
        self.commit(state);
    }

    pub fn pop(&mut self, state: &mut SimulatorState) {
        self.text.pop();
        self.commit(state);
    }

    pub fn clear(&mut self, state: &mut SimulatorState) {
        self.text.clear();
        self.commit(state);
    }

    /// Replace the draft with the stored value, unless it already parses to it.
    pub fn sync(&mut self, state: &SimulatorState) {
        let stored = state.value(self.field);
        if !self.shows(stored) {
            self.text = display_value(stored);
        }
    }

    fn commit(&mut self, state: &mut SimulatorState) {
        let stored = state.enter_text(self.field, &self.text);
        if !self.shows(stored) {
            self.text = display_value(stored);
        }
    }

    /// Whether the draft already reads as `stored`.
    ///
    /// A number is compared as typed, so clamped or zeroed entries (`150`,
    /// `-20`) do not match. Text that is not a number yet (`""`, `"-"`) is
    /// compared through the fallback, which keeps it editable.
    fn shows(&self, stored: f64) -> bool {
        match self.text.trim().parse::<f64>() {
            Ok(typed) => typed == stored,
            Err(_) => resolve_entry(self.field, &self.text) == stored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_and_field_share_one_value() {
        let mut state = SimulatorState::default();
        state.nudge_slider(InputField::ReportsPerMonth, 10);
        assert_eq!(state.value(InputField::ReportsPerMonth), 50.0);

        state.enter_text(InputField::ReportsPerMonth, "120");
        assert_eq!(state.value(InputField::ReportsPerMonth), 120.0);

        state.nudge_slider(InputField::ReportsPerMonth, -1);
        assert_eq!(state.value(InputField::ReportsPerMonth), 119.0);
    }

    #[test]
    fn result_is_recomputed_on_every_change() {
        let mut state = SimulatorState::default();
        assert_eq!(state.result().hours_saved, 37.0);

        state.enter_text(InputField::AutomationLevel, "0");
        assert_eq!(state.result().hours_saved, 20.0);
        assert_eq!(state.result().roi_label(), "2.0");

        state.enter_text(InputField::HoursPerReport, "oops");
        assert_eq!(state.result().baseline_hours, 0.0);
    }

    #[test]
    fn typed_out_of_range_value_survives_until_slider_moves() {
        let mut state = SimulatorState::default();
        state.enter_text(InputField::ReportsPerMonth, "5");
        assert_eq!(state.value(InputField::ReportsPerMonth), 5.0);

        state.nudge_slider(InputField::ReportsPerMonth, 1);
        assert_eq!(state.value(InputField::ReportsPerMonth), 11.0);
    }

    #[test]
    fn jump_slider_hits_bounds() {
        let mut state = SimulatorState::default();
        assert_eq!(state.jump_slider(InputField::HoursPerReport, true), 8.0);
        assert_eq!(state.jump_slider(InputField::AutomationLevel, false), 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = SimulatorState::default();
        state.enter_text(InputField::AutomationLevel, "99");
        state.cycle_org(true);
        state.reset();
        assert_eq!(state, SimulatorState::default());
    }

    #[test]
    fn numeric_field_commits_each_keystroke() {
        let mut state = SimulatorState::default();
        let mut field = NumericField::new(InputField::HoursPerReport, &state);
        assert_eq!(field.text(), "2");

        field.push('5', &mut state);
        assert_eq!(field.text(), "25");
        assert_eq!(state.value(InputField::HoursPerReport), 25.0);

        field.clear(&mut state);
        assert_eq!(field.text(), "");
        assert_eq!(state.value(InputField::HoursPerReport), 0.0);
    }

    #[test]
    fn numeric_field_shows_clamped_automation() {
        let mut state = SimulatorState::default();
        let mut field = NumericField::new(InputField::AutomationLevel, &state);
        field.push('0', &mut state);
        assert_eq!(state.value(InputField::AutomationLevel), 100.0);
        assert_eq!(field.text(), "100");
    }

    #[test]
    fn numeric_field_resyncs_after_slider_move() {
        let mut state = SimulatorState::default();
        let mut field = NumericField::new(InputField::ReportsPerMonth, &state);
        state.nudge_slider(InputField::ReportsPerMonth, 5);
        field.sync(&state);
        assert_eq!(field.text(), "45");
    }

    #[test]
    fn numeric_field_shows_zero_for_negative_automation() {
        let mut state = SimulatorState::default();
        let mut field = NumericField::new(InputField::AutomationLevel, &state);
        field.clear(&mut state);
        field.push('-', &mut state);
        assert_eq!(field.text(), "-");
        field.push('2', &mut state);
        assert_eq!(state.value(InputField::AutomationLevel), 0.0);
        assert_eq!(field.text(), "0");

        field.text = "-20".to_string();
        field.sync(&state);
        assert_eq!(field.text(), "0");
    }

    #[test]
    fn numeric_field_shows_zero_for_negative_reports() {
        let mut state = SimulatorState::default();
        let mut field = NumericField::new(InputField::ReportsPerMonth, &state);
        field.clear(&mut state);
        field.push('-', &mut state);
        field.push('5', &mut state);
        assert_eq!(field.text(), "0");
        assert_eq!(state.result().baseline_hours, 0.0);
    }
}
