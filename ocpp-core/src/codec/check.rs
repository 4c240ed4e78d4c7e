//! Field constraints referenced from `record!` field tables, e.g. `[max_len 20]`.
//!
//! Every check passes for absent optional values.

use crate::error::ParseErrorKind;
use crate::set::OrderedSet;

/// Length of a string (characters) or collection (items).
pub trait Measure {
    fn measure(&self) -> Option<usize>;
}

impl Measure for String {
    fn measure(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl<T> Measure for OrderedSet<T> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Measure> Measure for Option<T> {
    fn measure(&self) -> Option<usize> {
        self.as_ref().and_then(Measure::measure)
    }
}

/// Numeric value used by range checks.
pub trait Magnitude {
    fn magnitude(&self) -> Option<f64>;
}

macro_rules! magnitude {
    ($($ty:ty),+) => {
        $(
            impl Magnitude for $ty {
                fn magnitude(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )+
    };
}

magnitude!(i32, i64, u32, u64, f64);

impl<T: Magnitude> Magnitude for Option<T> {
    fn magnitude(&self) -> Option<f64> {
        self.as_ref().and_then(Magnitude::magnitude)
    }
}

/// Strings in a collection, for per-element length limits.
pub trait Strings {
    fn strings(&self) -> Vec<&str>;
}

impl Strings for OrderedSet<String> {
    fn strings(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl<T: Strings> Strings for Option<T> {
    fn strings(&self) -> Vec<&str> {
        self.as_ref().map(Strings::strings).unwrap_or_default()
    }
}

pub fn max_len<T: Measure>(value: &T, max: usize) -> Result<(), ParseErrorKind> {
    match value.measure() {
        Some(len) if len > max => Err(ParseErrorKind::InvalidValue(format!(
            "length {len} exceeds maximum of {max}"
        ))),
        _ => Ok(()),
    }
}

pub fn max_items<T: Measure>(value: &T, max: usize) -> Result<(), ParseErrorKind> {
    match value.measure() {
        Some(len) if len > max => Err(ParseErrorKind::InvalidValue(format!(
            "{len} items exceed maximum of {max}"
        ))),
        _ => Ok(()),
    }
}

pub fn each_max_len<T: Strings>(value: &T, max: usize) -> Result<(), ParseErrorKind> {
    match value.strings().into_iter().find(|s| s.chars().count() > max) {
        Some(s) => Err(ParseErrorKind::InvalidValue(format!(
            "element `{s}` exceeds maximum length of {max}"
        ))),
        None => Ok(()),
    }
}

pub fn min<T: Magnitude>(value: &T, min: i64) -> Result<(), ParseErrorKind> {
    match value.magnitude() {
        Some(v) if v < min as f64 => Err(ParseErrorKind::InvalidValue(format!(
            "{v} is below minimum of {min}"
        ))),
        _ => Ok(()),
    }
}

pub fn max<T: Magnitude>(value: &T, max: i64) -> Result<(), ParseErrorKind> {
    match value.magnitude() {
        Some(v) if v > max as f64 => Err(ParseErrorKind::InvalidValue(format!(
            "{v} is above maximum of {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_pass_every_check() {
        let absent: Option<String> = None;
        assert!(max_len(&absent, 0).is_ok());
        assert!(min(&None::<i32>, 1).is_ok());
        assert!(each_max_len(&None::<OrderedSet<String>>, 1).is_ok());
    }

    #[test]
    fn limits_are_inclusive() {
        assert!(max_len(&"abcd".to_string(), 4).is_ok());
        assert!(max_len(&"abcde".to_string(), 4).is_err());
        assert!(min(&0, 0).is_ok());
        assert!(min(&-1, 0).is_err());
        assert!(max(&Some(3.0), 3).is_ok());
        assert!(max(&Some(3.5), 3).is_err());
        let keys = OrderedSet::from(["short".to_string(), "much-too-long".to_string()]);
        assert!(each_max_len(&keys, 5).is_err());
        assert!(max_items(&keys, 2).is_ok());
        assert!(max_items(&keys, 1).is_err());
    }
}
