//! Chart samples.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

/// A value recorded at a point in time.
///
/// Samples compare by `value` only; two samples with the same value but
/// different timestamps are equal.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Sample {
    pub value: f64,
    pub timestamp: i64,
}

impl Sample {
    pub fn new(value: f64, timestamp: i64) -> Sample {
        Sample { value, timestamp }
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Sample) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Sample) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/// The smallest and largest value in `samples`, as `(min, max)`.
///
/// NaN values are ignored. Returns `None` if there is nothing left to
/// compare.
pub fn value_range(samples: &[Sample]) -> Option<(f64, f64)> {
    samples
        .iter()
        .map(|s| s.value)
        .filter(|v| !v.is_nan())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_value_only() {
        let a = Sample::new(3.0, 100);
        let b = Sample::new(3.0, 200);
        let c = Sample::new(4.0, 0);
        assert_eq!(a, b);
        assert!(a < c);
        assert_eq!(c.partial_cmp(&b), Some(Ordering::Greater));
    }

    #[test]
    fn nan_is_unordered() {
        let a = Sample::new(f64::NAN, 0);
        let b = a;
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&Sample::new(1.0, 0)), None);
    }

    #[test]
    fn range() {
        assert_eq!(value_range(&[]), None);
        let samples = [
            Sample::new(5.0, 0),
            Sample::new(-2.5, 1),
            Sample::new(f64::NAN, 2),
            Sample::new(11.0, 3),
        ];
        assert_eq!(value_range(&samples), Some((-2.5, 11.0)));
        assert_eq!(value_range(&samples[..1]), Some((5.0, 5.0)));
        assert_eq!(value_range(&samples[2..3]), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_sample() {
        let s: Sample = serde_json::from_str(r#"{"value": 1.5, "timestamp": 1609113600}"#).unwrap();
        assert_eq!(s.value, 1.5);
        assert_eq!(s.timestamp, 1609113600);
    }
}
