//! Geometry for line charts.
//!
//! The heart of this crate is [`interpolate`], which turns an ordered list of
//! points into the control points of a smooth curve through all of them. The
//! rest builds on it: mapping time-ordered [`Sample`]s into a chart's plot
//! area, and producing the line, fill and grid geometry a renderer needs.
//!
//! Everything here is plain data in and [`kurbo`] geometry out; drawing,
//! input handling and animation are up to the caller.
//!
//! ```
//! use kurbo::Point;
//! use linecurve::interpolate;
//!
//! let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
//! let segments = interpolate(&points);
//! assert_eq!(segments[0].p1, Point::new(3.0, 0.0));
//! assert_eq!(segments[0].p2, Point::new(7.0, 0.0));
//! ```

mod curve;
mod error;
mod grid;
mod layout;
mod path;
mod sample;
mod util;

pub use curve::{cubics, interpolate, Segment, TENSION};
pub use error::Error;
pub use grid::{grid_lines, GridLine};
pub use layout::{ChartLayout, ChartPaths};
pub use path::{curved_path, fill_path, line_path};
pub use sample::{value_range, Sample};
