//! "Real-Time Style" KPI series.
//!
//! The series looks live but is a fixed function of the point index:
//! quarters starting at Q1 2022, three metrics cycling with small periods.

use serde::Serialize;

/// Number of quarters in the series (Q1 2022 .. Q4 2024).
pub const KPI_SERIES_LEN: usize = 12;

/// First year on the x-axis.
const FIRST_YEAR: usize = 2022;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiPoint {
    /// Quarter label, e.g. `"Q3 2023"`.
    pub name: String,
    pub accuracy: f64,
    pub efficiency: f64,
    pub impact: f64,
}

/// Generate the point at `index`.
pub fn kpi_point(index: usize) -> KpiPoint {
    KpiPoint {
        name: format!("Q{} {}", index % 4 + 1, FIRST_YEAR + index / 4),
        accuracy: (96 + index % 3) as f64,
        efficiency: (70 + (index * 2) % 20) as f64,
        impact: 3.0 + (index % 5) as f64 / 2.0,
    }
}

/// The full 12-point series.
pub fn live_series() -> Vec<KpiPoint> {
    (0..KPI_SERIES_LEN).map(kpi_point).collect()
}

/// Which metric of a `KpiPoint` to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiMetric {
    Accuracy,
    Efficiency,
    Impact,
}

impl KpiMetric {
    pub const ALL: [KpiMetric; 3] = [KpiMetric::Accuracy, KpiMetric::Efficiency, KpiMetric::Impact];

    pub fn label(self) -> &'static str {
        match self {
            KpiMetric::Accuracy => "accuracy",
            KpiMetric::Efficiency => "efficiency",
            KpiMetric::Impact => "impact",
        }
    }

    pub fn value(self, point: &KpiPoint) -> f64 {
        match self {
            KpiMetric::Accuracy => point.accuracy,
            KpiMetric::Efficiency => point.efficiency,
            KpiMetric::Impact => point.impact,
        }
    }

    /// Chart glyph used by the ASCII plot.
    pub fn glyph(self) -> char {
        match self {
            KpiMetric::Accuracy => 'a',
            KpiMetric::Efficiency => 'e',
            KpiMetric::Impact => 'i',
        }
    }

    /// Line color used by the chart panel (`#34D399`, `#60A5FA`, `#F59E0B`).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            KpiMetric::Accuracy => (0x34, 0xD3, 0x99),
            KpiMetric::Efficiency => (0x60, 0xA5, 0xFA),
            KpiMetric::Impact => (0xF5, 0x9E, 0x0B),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_twelve_quarters() {
        let series = live_series();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].name, "Q1 2022");
        assert_eq!(series[5].name, "Q2 2023");
        assert_eq!(series[11].name, "Q4 2024");
    }

    #[test]
    fn metrics_follow_their_formulas() {
        let p = kpi_point(7);
        assert_eq!(p.accuracy, 97.0);
        assert_eq!(p.efficiency, 84.0);
        assert_eq!(p.impact, 4.0);

        let p = kpi_point(11);
        assert_eq!(p.accuracy, 98.0);
        // (22 % 20) = 2
        assert_eq!(p.efficiency, 72.0);
        assert_eq!(p.impact, 3.5);
    }

    #[test]
    fn series_is_deterministic() {
        assert_eq!(live_series(), live_series());
    }
}
