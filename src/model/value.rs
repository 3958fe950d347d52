use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Scalar value bound to a relation, tagged with explicit type information so
/// the representation stays unambiguous across language bindings.
///
/// There is no null variant: a property cannot be constructed around an
/// absent value, and "relation lacks a value for this type" is expressed as
/// `Option::None` at the resolution layer instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum PropValue {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point number.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Arbitrary binary payload.
    Bytes(Vec<u8>),
}

impl PropValue {
    /// Natural ordering between two values.
    ///
    /// Defined only within a single variant; returns `None` across variants
    /// and for NaN floats.
    pub fn partial_cmp_value(&self, other: &PropValue) -> Option<Ordering> {
        match (self, other) {
            (PropValue::Bool(a), PropValue::Bool(b)) => a.partial_cmp(b),
            (PropValue::Int(a), PropValue::Int(b)) => a.partial_cmp(b),
            (PropValue::Float(a), PropValue::Float(b)) => a.partial_cmp(b),
            (PropValue::Str(a), PropValue::Str(b)) => a.partial_cmp(b),
            (PropValue::Bytes(a), PropValue::Bytes(b)) => a.partial_cmp(b),
            _ => None,
        }
    }

    /// Stable fallback order for values natural ordering cannot rank: variant
    /// tag first, then a total order within the variant (`f64::total_cmp` for
    /// floats).
    ///
    /// Content-based, so the result is identical across runs and processes.
    /// Distinct instances holding equal content compare equal here, which is
    /// a stronger guarantee than an identity tie-break but deliberately so:
    /// total-order correctness governs this subsystem.
    pub fn stable_cmp(&self, other: &PropValue) -> Ordering {
        self.tag_rank().cmp(&other.tag_rank()).then_with(|| {
            match (self, other) {
                (PropValue::Bool(a), PropValue::Bool(b)) => a.cmp(b),
                (PropValue::Int(a), PropValue::Int(b)) => a.cmp(b),
                (PropValue::Float(a), PropValue::Float(b)) => a.total_cmp(b),
                (PropValue::Str(a), PropValue::Str(b)) => a.cmp(b),
                (PropValue::Bytes(a), PropValue::Bytes(b)) => a.cmp(b),
                // Equal tag ranks imply equal variants.
                _ => Ordering::Equal,
            }
        })
    }

    fn tag_rank(&self) -> u8 {
        match self {
            PropValue::Bool(_) => 0,
            PropValue::Int(_) => 1,
            PropValue::Float(_) => 2,
            PropValue::Str(_) => 3,
            PropValue::Bytes(_) => 4,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}
