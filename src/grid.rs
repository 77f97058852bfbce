//! Horizontal grid lines.

use kurbo::{Line, Point};

use crate::layout::ChartLayout;
use crate::sample::{self, Sample};

/// A horizontal grid line across the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    /// Position from the top of the plot area, in `0.0..=1.0`.
    pub fraction: f64,
    pub y: f64,
    pub line: Line,
    /// The value at this line, truncated to an integer.
    pub label: i64,
    /// Lines between the top and bottom edge are drawn dashed.
    pub dashed: bool,
}

const FEW: &[f64] = &[0.0, 1.0];
const MANY: &[f64] = &[0.0, 0.25, 0.5, 0.75, 1.0];

/// The grid lines for a chart of `samples`.
///
/// Up to three samples only get lines at the top and bottom of the plot
/// area; four or more get quarter lines as well.
pub fn grid_lines(layout: &ChartLayout, samples: &[Sample]) -> Vec<GridLine> {
    let fractions = match samples.len() {
        0 => return Vec::new(),
        1..=3 => FEW,
        _ => MANY,
    };
    let plot_height = layout.plot_height();
    let range = sample::value_range(samples);
    fractions
        .iter()
        .map(|&fraction| {
            let y = fraction * plot_height;
            let label = match range {
                Some((min, max)) => {
                    let span = (max - min) * layout.headroom;
                    ((1.0 - fraction) * span) as i64 + min as i64
                }
                None => 0,
            };
            GridLine {
                fraction,
                y,
                line: Line::new(Point::new(0.0, y), Point::new(layout.width, y)),
                label,
                dashed: fraction > 0.0 && fraction < 1.0,
            }
        })
        .collect()
}
