//! Value: raw start/end values as they appear in a property spec, and the values written out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coercion::format_number;
use crate::stagger::Stagger;

/// A start or end value before any parsing.
///
/// Specs are loosely typed: `{ "20": "30rem" }` carries a text start and a text end, while
/// `from_to(20, 30)` carries numbers. A `Stagger` is resolved per index before parsing.
#[derive(Clone, Debug)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Stagger(Stagger),
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_stagger(&self) -> bool {
        matches!(self, RawValue::Stagger(_))
    }
}

impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RawValue::Number(a), RawValue::Number(b)) => a == b,
            (RawValue::Text(a), RawValue::Text(b)) => a == b,
            (RawValue::Stagger(a), RawValue::Stagger(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Stringifies the way a template literal would.
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => f.write_str(&format_number(*n)),
            RawValue::Text(s) => f.write_str(s),
            RawValue::Stagger(_) => f.write_str("[stagger]"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

impl From<f32> for RawValue {
    fn from(v: f32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl From<Stagger> for RawValue {
    fn from(v: Stagger) -> Self {
        RawValue::Stagger(v)
    }
}

/// A value written into a target: a plain number for number deltas, a string for unit and
/// color deltas.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl PropValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            PropValue::Number(_) => None,
        }
    }
}

impl From<PropValue> for RawValue {
    fn from(v: PropValue) -> Self {
        match v {
            PropValue::Number(n) => RawValue::Number(n),
            PropValue::Text(s) => RawValue::Text(s),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Number(n) => f.write_str(&format_number(*n)),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_template_stringification() {
        assert_eq!(RawValue::Number(20.0).to_string(), "20");
        assert_eq!(RawValue::Number(0.25).to_string(), "0.25");
        assert_eq!(RawValue::from("30rem").to_string(), "30rem");
        assert_eq!(RawValue::from(Stagger::step(1.0, 2.0)).to_string(), "[stagger]");
    }

    #[test]
    fn prop_value_json_is_untagged() {
        let n = serde_json::to_string(&PropValue::Number(25.0)).unwrap();
        assert_eq!(n, "25.0");
        let t: PropValue = serde_json::from_str("\"12px\"").unwrap();
        assert_eq!(t, PropValue::Text("12px".into()));
    }
}
