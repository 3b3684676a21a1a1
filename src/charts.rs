//! Geometry helpers for the dashboard mockup's SVG charts.
//!
//! The dashboard renders fixed in-memory arrays; these functions turn them
//! into bar heights, polyline point strings, and pie arc paths.

use std::f64::consts::PI;

/// Scales a series so the tallest value fills `max_height`. An all-zero
/// series scales to all-zero bars.
pub fn scale_heights(values: &[f64], max_height: f64) -> Vec<f64> {
    let peak = values.iter().cloned().fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / peak * max_height).collect()
}

/// SVG `points` attribute for a line chart, with values spread evenly across
/// `width` and the tallest value touching the top of the plot area.
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let heights = scale_heights(values, height);
    heights
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:.1},{:.1}", i as f64 * step, height - h))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub path: String,
    /// Share of the whole circle, 0..=1.
    pub fraction: f64,
}

/// Donut slices for the platform-distribution chart, starting at 12 o'clock
/// and proceeding clockwise in input order.
pub fn pie_slices(values: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0_f64;
    values
        .iter()
        .map(|v| {
            let fraction = v / total;
            let end = start + fraction;
            let slice = PieSlice {
                path: donut_arc_path(cx, cy, outer, inner, start, end),
                fraction,
            };
            start = end;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, fraction: f64) -> (f64, f64) {
    // Fractions are measured from the top of the circle.
    let angle = fraction * 2.0 * PI - PI / 2.0;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn donut_arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    let large = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {x0:.2} {y0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {inner:.2} {inner:.2} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_plot() {
        let heights = scale_heights(&[10.0, 40.0, 20.0], 200.0);
        assert_eq!(heights, vec![50.0, 200.0, 100.0]);
    }

    #[test]
    fn zero_series_stays_flat() {
        assert_eq!(scale_heights(&[0.0, 0.0], 100.0), vec![0.0, 0.0]);
    }

    #[test]
    fn polyline_has_one_point_per_value() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 300.0, 100.0);
        assert_eq!(points.split(' ').count(), 3);
        // The peak sits on the top edge of the plot area.
        assert!(points.ends_with("300.0,0.0"));
    }

    #[test]
    fn polyline_of_nothing_is_empty() {
        assert_eq!(polyline_points(&[], 300.0, 100.0), "");
    }

    #[test]
    fn pie_fractions_cover_the_circle() {
        let slices = pie_slices(&[45.0, 30.0, 15.0, 10.0], 100.0, 100.0, 80.0, 40.0);
        assert_eq!(slices.len(), 4);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pie_of_zeros_renders_nothing() {
        assert!(pie_slices(&[0.0, 0.0], 100.0, 100.0, 80.0, 40.0).is_empty());
    }
}
