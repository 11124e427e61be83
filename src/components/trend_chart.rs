use dioxus::prelude::*;

pub const UP_THRESHOLD: f64 = 99.5;
pub const PARTIAL_THRESHOLD: f64 = 98.0;

// Drawing area in view box units; the svg stretches to its container
const WIDTH: f64 = 200.0;
const HEIGHT: f64 = 64.0;
const MARGIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendColor {
    Up,
    Partial,
    Down,
}

impl TrendColor {
    /// Bucket a mean uptime. NaN fails both comparisons and lands on `Down`.
    pub fn for_mean(mean: f64) -> Self {
        if mean >= UP_THRESHOLD {
            TrendColor::Up
        } else if mean >= PARTIAL_THRESHOLD {
            TrendColor::Partial
        } else {
            TrendColor::Down
        }
    }

    pub fn stroke(self) -> &'static str {
        match self {
            TrendColor::Up => "hsl(var(--status-up))",
            TrendColor::Partial => "hsl(var(--status-partial))",
            TrendColor::Down => "hsl(var(--status-down))",
        }
    }
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn trend_color(data: &[f64]) -> TrendColor {
    TrendColor::for_mean(mean(data))
}

/// `(index, value)` pairs in input order.
pub fn plot_points(data: &[f64]) -> Vec<(usize, f64)> {
    data.iter().copied().enumerate().collect()
}

/// Scale plot points into the view box and format them for `<polyline>`.
/// The y axis spans the data's own range; a flat series sits mid-height.
fn polyline_points(points: &[(usize, f64)]) -> String {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    let inner_w = WIDTH - MARGIN * 2.0;
    let inner_h = HEIGHT - MARGIN * 2.0;
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .map(|&(i, v)| {
            let x = MARGIN + i as f64 * step;
            let y = if span > 0.0 {
                MARGIN + (hi - v) / span * inner_h
            } else {
                HEIGHT / 2.0
            };
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(non_snake_case)]
#[component]
pub fn TrendChart(data: Vec<f64>) -> Element {
    let color = trend_color(&data).stroke();
    let points = polyline_points(&plot_points(&data));
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");

    rsx! {
        div { class: "trend-chart",
            svg { view_box: "{view_box}", width: "100%", height: "100%", "preserveAspectRatio": "none",
                polyline {
                    "points": "{points}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    "vector-effect": "non-scaling-stroke",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_up() {
        assert_eq!(trend_color(&[100.0, 100.0, 100.0]), TrendColor::Up);
    }

    #[test]
    fn test_color_partial() {
        assert_eq!(trend_color(&[98.2, 98.2, 98.2]), TrendColor::Partial);
    }

    #[test]
    fn test_color_down() {
        assert_eq!(trend_color(&[50.0]), TrendColor::Down);
    }

    #[test]
    fn test_threshold_edges() {
        assert_eq!(TrendColor::for_mean(99.5), TrendColor::Up);
        assert_eq!(TrendColor::for_mean(99.49), TrendColor::Partial);
        assert_eq!(TrendColor::for_mean(98.0), TrendColor::Partial);
        assert_eq!(TrendColor::for_mean(97.99), TrendColor::Down);
    }

    #[test]
    fn test_empty_history_is_down() {
        assert!(mean(&[]).is_nan());
        assert_eq!(trend_color(&[]), TrendColor::Down);
        assert_eq!(polyline_points(&plot_points(&[])), "");
    }

    #[test]
    fn test_plot_points_keep_order() {
        assert_eq!(
            plot_points(&[99.0, 97.5, 100.0]),
            vec![(0, 99.0), (1, 97.5), (2, 100.0)]
        );
    }

    #[test]
    fn test_polyline_scaling() {
        let pts = polyline_points(&plot_points(&[100.0, 90.0]));
        assert_eq!(pts, "5.00,5.00 195.00,59.00");

        let flat = polyline_points(&plot_points(&[99.9, 99.9]));
        assert_eq!(flat, "5.00,32.00 195.00,32.00");
    }
}
