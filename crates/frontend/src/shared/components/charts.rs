//! Inline SVG chart components for the dashboard panels.
//!
//! The panels render fixed sample series, so the components take plain
//! vectors rather than signals. Geometry is computed by the pure helpers
//! below.

use leptos::prelude::*;

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PAD: f64 = 28.0;

/// Horizontal pixel positions for `n` evenly spaced points. A single point
/// sits in the middle of the plot area.
fn x_positions(n: usize, width: f64, pad: f64) -> Vec<f64> {
    if n == 1 {
        return vec![width / 2.0];
    }
    (0..n)
        .map(|i| pad + (i as f64 / (n - 1) as f64) * (width - 2.0 * pad))
        .collect()
}

/// Vertical pixel positions scaled between the series min and max
/// (SVG origin is top-left, so larger values map to smaller y). A flat
/// series sits on the baseline.
fn y_positions(values: &[f64], height: f64, pad: f64) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };
    values
        .iter()
        .map(|v| height - pad - ((v - min) / range) * (height - 2.0 * pad))
        .collect()
}

/// Assemble an SVG polyline `points` attribute from pixel coordinates.
fn polyline_points(xs: &[f64], ys: &[f64]) -> String {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slot centers for `n` bars spread over the plot area.
fn bar_slots(n: usize, width: f64, pad: f64) -> Vec<f64> {
    let span = (width - 2.0 * pad) / n.max(1) as f64;
    (0..n).map(|i| pad + (i as f64 + 0.5) * span).collect()
}

/// Bar heights in pixels, proportional to the value over a zero baseline.
fn bar_heights(values: &[f64], height: f64, pad: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    values
        .iter()
        .map(|v| (v.max(0.0) / max) * (height - 2.0 * pad))
        .collect()
}

/// Time-series line chart with point markers and x-axis labels.
#[component]
pub fn LineChart(
    labels: Vec<String>,
    values: Vec<f64>,
    /// Stroke color for the series
    stroke: String,
) -> impl IntoView {
    let xs = x_positions(values.len(), CHART_WIDTH, CHART_PAD);
    let ys = y_positions(&values, CHART_HEIGHT, CHART_PAD);
    let points = polyline_points(&xs, &ys);

    let markers = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| {
            view! {
                <circle
                    cx=format!("{x:.1}")
                    cy=format!("{y:.1}")
                    r="3.5"
                    fill=stroke.clone()
                />
            }
        })
        .collect_view();

    let axis_labels = xs
        .iter()
        .zip(labels)
        .map(|(x, label)| {
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{:.1}", CHART_HEIGHT - 6.0)
                    text-anchor="middle"
                    class="chart__label"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            <line
                x1=format!("{CHART_PAD}")
                y1=format!("{:.1}", CHART_HEIGHT - CHART_PAD)
                x2=format!("{:.1}", CHART_WIDTH - CHART_PAD)
                y2=format!("{:.1}", CHART_HEIGHT - CHART_PAD)
                class="chart__axis"
            />
            <polyline
                points=points
                fill="none"
                stroke=stroke.clone()
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            {markers}
            {axis_labels}
        </svg>
    }
}

/// Category bar chart over a zero baseline with x-axis labels.
#[component]
pub fn BarChart(
    labels: Vec<String>,
    values: Vec<f64>,
    /// Fill color for the bars
    fill: String,
) -> impl IntoView {
    let centers = bar_slots(values.len(), CHART_WIDTH, CHART_PAD);
    let heights = bar_heights(&values, CHART_HEIGHT, CHART_PAD);
    let bar_width = ((CHART_WIDTH - 2.0 * CHART_PAD) / values.len().max(1) as f64) * 0.6;

    let bars = centers
        .iter()
        .zip(&heights)
        .map(|(center, height)| {
            view! {
                <rect
                    x=format!("{:.1}", center - bar_width / 2.0)
                    y=format!("{:.1}", CHART_HEIGHT - CHART_PAD - height)
                    width=format!("{bar_width:.1}")
                    height=format!("{height:.1}")
                    rx="3"
                    fill=fill.clone()
                />
            }
        })
        .collect_view();

    let axis_labels = centers
        .iter()
        .zip(labels)
        .map(|(x, label)| {
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{:.1}", CHART_HEIGHT - 6.0)
                    text-anchor="middle"
                    class="chart__label"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            <line
                x1=format!("{CHART_PAD}")
                y1=format!("{:.1}", CHART_HEIGHT - CHART_PAD)
                x2=format!("{:.1}", CHART_WIDTH - CHART_PAD)
                y2=format!("{:.1}", CHART_HEIGHT - CHART_PAD)
                class="chart__axis"
            />
            {bars}
            {axis_labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_positions_span_the_plot_area() {
        let xs = x_positions(5, 560.0, 28.0);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 28.0);
        assert_eq!(xs[4], 532.0);
        // even spacing
        assert_eq!(xs[1] - xs[0], 126.0);
    }

    #[test]
    fn single_point_is_centered() {
        assert_eq!(x_positions(1, 560.0, 28.0), vec![280.0]);
    }

    #[test]
    fn y_positions_map_extremes_to_plot_edges() {
        let ys = y_positions(&[18.0, 22.0], 240.0, 28.0);
        // min value sits on the baseline, max at the top of the plot area
        assert_eq!(ys[0], 212.0);
        assert_eq!(ys[1], 28.0);
    }

    #[test]
    fn flat_series_sits_on_the_baseline() {
        let ys = y_positions(&[80.0, 80.0, 80.0], 240.0, 28.0);
        assert!(ys.iter().all(|y| *y == 212.0));
    }

    #[test]
    fn polyline_points_format() {
        let points = polyline_points(&[28.0, 154.0], &[212.0, 28.0]);
        assert_eq!(points, "28.0,212.0 154.0,28.0");
    }

    #[test]
    fn bar_heights_are_proportional_to_values() {
        let heights = bar_heights(&[42.0, 84.0], 240.0, 28.0);
        assert_eq!(heights[1], 184.0);
        assert_eq!(heights[0], 92.0);
    }

    #[test]
    fn empty_series_produces_no_geometry() {
        assert!(x_positions(0, 560.0, 28.0).is_empty());
        assert!(bar_heights(&[], 240.0, 28.0).is_empty());
    }
}
