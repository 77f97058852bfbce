//! Placing samples in chart space.

use kurbo::{BezPath, Point};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::Error;
use crate::path;
use crate::sample::{self, Sample};

/// The drawing area of a chart and how values are fitted into it.
///
/// Points produced by [`ChartLayout::map_samples`] are relative to the plot
/// area, which starts `top_space` below the top of the chart and ends
/// `bottom_space` above its bottom. Larger values have smaller `y`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct ChartLayout {
    /// The full width of the chart.
    pub width: f64,
    /// The full height of the chart.
    pub height: f64,
    /// Space above the plot area.
    pub top_space: f64,
    /// Space below the plot area.
    pub bottom_space: f64,
    /// The top of the plot area, as a multiple of the value range.
    ///
    /// With the default of 1.1 the largest value sits below the top edge by
    /// a tenth of the range.
    pub headroom: f64,
    /// Whether the line is drawn as a smooth curve.
    pub curved: bool,
}

/// The paths needed to draw a chart.
#[derive(Clone, Debug)]
pub struct ChartPaths {
    /// The samples, in plot area coordinates.
    pub points: Vec<Point>,
    /// The line through the points.
    pub stroke: BezPath,
    /// The closed region below the line, down to the bottom of the plot area.
    pub fill: BezPath,
}

impl Default for ChartLayout {
    fn default() -> ChartLayout {
        ChartLayout {
            width: 0.0,
            height: 0.0,
            top_space: 10.0,
            bottom_space: 30.0,
            headroom: 1.1,
            curved: false,
        }
    }
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> ChartLayout {
        ChartLayout {
            width,
            height,
            ..ChartLayout::default()
        }
    }

    /// The height of the area the data is drawn in.
    pub fn plot_height(&self) -> f64 {
        self.height - self.top_space - self.bottom_space
    }

    /// Check that this layout leaves room to draw in.
    pub fn validate(&self) -> Result<(), Error> {
        let finite = [self.width, self.height, self.top_space, self.bottom_space]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.plot_height() <= 0.0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.headroom.is_finite() || self.headroom <= 0.0 {
            return Err(Error::InvalidHeadroom(self.headroom));
        }
        Ok(())
    }

    /// Horizontal distance between consecutive samples.
    pub fn line_gap(&self, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            self.width / count as f64
        }
    }

    /// Map samples to points in the plot area.
    ///
    /// Sample `i` is placed at `x = i * line_gap`. The smallest value lands on
    /// the bottom of the plot area. If all values are equal, every point is
    /// on the bottom. Values spread too far apart to scale fail with
    /// [`Error::RangeOverflow`].
    pub fn map_samples(&self, samples: &[Sample]) -> Result<Vec<Point>, Error> {
        self.validate()?;
        if let Some((index, s)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.value.is_finite())
        {
            return Err(Error::NonFiniteSample {
                index,
                value: s.value,
            });
        }
        let (min, max) = match sample::value_range(samples) {
            Some(range) => range,
            None => return Ok(Vec::new()),
        };
        let plot_height = self.plot_height();
        let range = (max - min) * self.headroom;
        if !range.is_finite() {
            return Err(Error::RangeOverflow { min, max });
        }
        if range == 0.0 {
            log::debug!("flat series of {} samples, placing on baseline", samples.len());
        }
        let gap = self.line_gap(samples.len());
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let fraction = if range == 0.0 {
                    0.0
                } else {
                    (s.value - min) / range
                };
                Point::new(i as f64 * gap, plot_height * (1.0 - fraction))
            })
            .collect();
        Ok(points)
    }

    /// The index of the sample nearest to `x`, for `count` samples laid out
    /// by [`ChartLayout::map_samples`].
    ///
    /// Positions outside the chart resolve to the first or last sample.
    /// Returns `None` if there are no samples or the width is not a positive,
    /// finite number.
    pub fn sample_index_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || !self.width.is_finite() || self.width <= 0.0 {
            return None;
        }
        let fraction = x / self.width;
        if fraction.is_nan() {
            return None;
        }
        let ix = (count as f64 * fraction).round();
        Some(ix.max(0.0).min((count - 1) as f64) as usize)
    }

    /// Map `samples` and build the line and fill paths through them.
    pub fn chart_paths(&self, samples: &[Sample]) -> Result<ChartPaths, Error> {
        let points = self.map_samples(samples)?;
        let stroke = if self.curved {
            path::curved_path(&points)
        } else {
            path::line_path(&points)
        };
        let fill = path::fill_path(&points, self.plot_height(), self.curved);
        Ok(ChartPaths {
            points,
            stroke,
            fill,
        })
    }
}
