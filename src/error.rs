//! Errors from laying out a chart.

use thiserror::Error;

/// An error mapping samples into chart space.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The chart has no drawable area.
    #[error("invalid chart dimensions: {width}x{height} leaves no plot area")]
    InvalidDimensions {
        /// The full chart width.
        width: f64,
        /// The full chart height, including the top and bottom space.
        height: f64,
    },
    /// The headroom factor must be a positive, finite number.
    #[error("invalid headroom factor {0}")]
    InvalidHeadroom(f64),
    /// A sample value is NaN or infinite.
    #[error("sample {index} has non-finite value {value}")]
    NonFiniteSample {
        /// Position of the sample in the input.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The spread between the smallest and largest value, padded by the
    /// headroom, is too large to represent.
    #[error("value range {min}..{max} overflows")]
    RangeOverflow {
        /// The smallest sample value.
        min: f64,
        /// The largest sample value.
        max: f64,
    },
}
