//! Input contract for the two control kinds.
//!
//! - numeric fields: free text, `value || 0` fallback, automation clamped to
//!   `[0, 100]`
//! - sliders: whole steps, mechanically restricted to the configured range
//!
//! Nothing here returns an error; invalid input degrades to a defined value.

use crate::domain::{InputField, SliderSpec};

/// Lower bound for the automation numeric field.
pub const AUTOMATION_MIN: f64 = 0.0;
/// Upper bound for the automation numeric field.
pub const AUTOMATION_MAX: f64 = 100.0;

/// Parse numeric-field text, falling back to 0 for anything unusable.
///
/// Empty, unparseable, non-finite and negative entries all resolve to 0, so
/// the field path never hands the estimator a negative quantity.
pub fn parse_entry(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Resolve numeric-field text for `field` into the value stored in state.
pub fn resolve_entry(field: InputField, text: &str) -> f64 {
    let value = parse_entry(text);
    match field {
        InputField::AutomationLevel => value.clamp(AUTOMATION_MIN, AUTOMATION_MAX),
        InputField::ReportsPerMonth | InputField::HoursPerReport => value,
    }
}

/// Move a slider thumb by `steps` whole steps starting from `current`.
///
/// The thumb starts from the range-restricted position of `current`, so a
/// value that was typed out of range snaps back into range on first move.
pub fn nudge_slider(spec: SliderSpec, current: f64, steps: i32) -> f64 {
    let start = spec.position(current).round();
    (start + f64::from(steps) * SliderSpec::STEP).clamp(spec.min, spec.max)
}

/// Render a stored value the way a numeric field displays it.
///
/// Whole numbers print without a fractional part (`40`, not `40.0`).
pub fn display_value(value: f64) -> String {
    format!("{value}")
}

/// Whether a keystroke may be typed into a numeric field.
pub fn accepts_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_text_falls_back_to_zero() {
        assert_eq!(parse_entry("abc"), 0.0);
        assert_eq!(parse_entry(""), 0.0);
        assert_eq!(parse_entry("   "), 0.0);
        assert_eq!(parse_entry("12abc"), 0.0);
        assert_eq!(parse_entry("NaN"), 0.0);
        assert_eq!(parse_entry("inf"), 0.0);
    }

    #[test]
    fn numeric_text_parses_as_typed() {
        assert_eq!(parse_entry("40"), 40.0);
        assert_eq!(parse_entry(" 7 "), 7.0);
        assert_eq!(parse_entry("2.5"), 2.5);
        assert_eq!(parse_entry("1e2"), 100.0);
        assert_eq!(parse_entry("5000"), 5000.0);
    }

    #[test]
    fn negative_entries_degrade_to_zero() {
        assert_eq!(parse_entry("-5"), 0.0);
        assert_eq!(resolve_entry(InputField::HoursPerReport, "-1"), 0.0);
    }

    #[test]
    fn automation_entry_is_clamped() {
        assert_eq!(resolve_entry(InputField::AutomationLevel, "150"), 100.0);
        assert_eq!(resolve_entry(InputField::AutomationLevel, "-20"), 0.0);
        assert_eq!(resolve_entry(InputField::AutomationLevel, "55"), 55.0);
        assert_eq!(resolve_entry(InputField::AutomationLevel, "x"), 0.0);
    }

    #[test]
    fn reports_entry_is_not_clamped_to_slider_range() {
        assert_eq!(resolve_entry(InputField::ReportsPerMonth, "500"), 500.0);
        assert_eq!(resolve_entry(InputField::ReportsPerMonth, "3"), 3.0);
    }

    #[test]
    fn slider_never_leaves_its_range() {
        let spec = InputField::HoursPerReport.slider();
        assert_eq!(nudge_slider(spec, 2.0, 1), 3.0);
        assert_eq!(nudge_slider(spec, 8.0, 1), 8.0);
        assert_eq!(nudge_slider(spec, 1.0, -5), 1.0);
        assert_eq!(nudge_slider(spec, 0.0, 1), 2.0);
        assert_eq!(nudge_slider(spec, 50.0, -1), 7.0);
        assert_eq!(nudge_slider(spec, 2.6, 0), 3.0);
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(display_value(40.0), "40");
        assert_eq!(display_value(2.5), "2.5");
        assert_eq!(display_value(0.0), "0");
    }
}
