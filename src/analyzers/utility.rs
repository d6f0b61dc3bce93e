use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Rounds `value` to `decimals` places, sending exact halves to the even digit.
///
/// The tie test is done on the exact binary value, so `1.25` (exactly
/// representable) rounds to `1.2` while `0.15` (stored just below the half)
/// rounds to `0.1`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(decimals);
    let lo = (value * factor).floor();

    // Single rounding of the exact `value * factor - (lo + 0.5)`, so the sign is exact.
    let diff = value.mul_add(factor, -(lo + 0.5));
    let rounded = if diff < 0.0 {
        lo
    } else if diff > 0.0 {
        lo + 1.0
    } else if lo % 2.0 == 0.0 {
        lo
    } else {
        lo + 1.0
    };

    rounded / factor
}

/// Largest magnitude written as a JSON integer; beyond it `f64` stops being exact.
const MAX_WHOLE: f64 = 9_007_199_254_740_992.0;

/// An `f64` that serializes as an integer when it has no fractional part.
struct Whole(f64);

impl Serialize for Whole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_WHOLE {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// Writes whole capacities as integers (`100` rather than `100.0`).
pub fn whole<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Whole(*value).serialize(serializer)
}

/// [`whole`] for an optional value; `None` stays `null`.
pub fn whole_opt<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    value.map(Whole).serialize(serializer)
}

/// [`whole`] applied to every value of a map.
pub fn whole_map<S: Serializer>(
    map: &BTreeMap<String, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(map.iter().map(|(k, v)| (k, Whole(*v))))
}

/// [`whole`] applied to every value of a two-level map.
pub fn whole_nested_map<S: Serializer>(
    map: &BTreeMap<String, BTreeMap<String, f64>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    struct Inner<'a>(&'a BTreeMap<String, f64>);

    impl Serialize for Inner<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            whole_map(self.0, serializer)
        }
    }

    serializer.collect_map(map.iter().map(|(k, inner)| (k, Inner(inner))))
}

/// Percentages are floats, except a zero share which is written as `0`.
pub fn perc<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if *value == 0.0 {
        serializer.serialize_i64(0)
    } else {
        serializer.serialize_f64(*value)
    }
}
