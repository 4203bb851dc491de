//! ASCII plotting of the KPI series for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual reading in a terminal or a pasted report
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - one polyline per metric, drawn with the metric glyph (`a`, `e`, `i`)
//! - metrics drawn earlier win where lines cross

use crate::data::{KpiMetric, KpiPoint};

/// Render all three KPI metrics over the series index.
pub fn render_kpi_plot(series: &[KpiPoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (y_min, y_max) = y_range(series).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for metric in KpiMetric::ALL {
        let line: Vec<(usize, usize)> = series
            .iter()
            .enumerate()
            .map(|(i, p)| {
                (
                    map_x(i, series.len(), width),
                    map_y(metric.value(p), y_min, y_max, height),
                )
            })
            .collect();
        draw_polyline(&mut grid, &line, metric.glyph());
    }

    let first = series.first().map(|p| p.name.as_str()).unwrap_or("-");
    let last = series.last().map(|p| p.name.as_str()).unwrap_or("-");

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {first} .. {last} | y=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let legend: Vec<String> = KpiMetric::ALL
        .iter()
        .map(|m| format!("{}={}", m.glyph(), m.label()))
        .collect();
    out.push_str(&legend.join(" "));
    out.push('\n');

    out
}

fn y_range(series: &[KpiPoint]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in series {
        for metric in KpiMetric::ALL {
            let y = metric.value(p);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(index: usize, len: usize, width: usize) -> usize {
    if len < 2 {
        return 0;
    }
    let u = index as f64 / (len as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_polyline(grid: &mut [Vec<char>], points: &[(usize, usize)], ch: char) {
    let mut prev = None;
    for &(x, y) in points {
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, x, y, ch),
            None => draw_line(grid, x, y, x, y, ch),
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, accuracy: f64, efficiency: f64, impact: f64) -> KpiPoint {
        KpiPoint {
            name: name.to_string(),
            accuracy,
            efficiency,
            impact,
        }
    }

    #[test]
    fn plot_golden_snapshot_small() {
        let series = vec![point("A", 10.0, 0.0, 5.0), point("B", 10.0, 0.0, 5.0)];

        let txt = render_kpi_plot(&series, 10, 5);
        let expected = concat!(
            "Plot: A .. B | y=[-0.50, 10.50]\n",
            "aaaaaaaaaa\n",
            "          \n",
            "iiiiiiiiii\n",
            "          \n",
            "eeeeeeeeee\n",
            "a=accuracy e=efficiency i=impact\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn live_series_plot_has_requested_size() {
        let series = crate::data::live_series();
        let txt = render_kpi_plot(&series, 48, 12);
        let lines: Vec<&str> = txt.lines().collect();
        // header + rows + legend
        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("Plot: Q1 2022 .. Q4 2024"));
        assert!(lines[1..13].iter().all(|l| l.chars().count() == 48));
    }

    #[test]
    fn empty_series_renders_blank_grid() {
        let txt = render_kpi_plot(&[], 10, 5);
        assert!(txt.starts_with("Plot: - .. - | y=[-0.05, 1.05]\n"));
    }
}
