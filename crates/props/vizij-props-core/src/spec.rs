//! PropertySpec: the raw, loosely typed description of one animated property.
//!
//! A spec is an ordered mapping. After the reserved timing keys are taken out, what remains is
//! either one `{ <start>: <end> }` pair or explicit `from`/`to` keys:
//!
//! ```text
//! { "20": "30rem", "duration": 2000, "curve": "M0,100 L100,0" }
//! { "from": 20, "to": 30, "delay": 200 }
//! ```
//!
//! Callbacks and custom curve functions cannot come from JSON; the builder methods cover them.

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::{RawValue, Stagger};

/// Per-tick progress callback: `(eased_progress, raw_progress, is_forward)`.
pub type ProgressCallback = Rc<dyn Fn(f64, f64, bool)>;

/// Lifecycle callback receiving the direction flag.
pub type EventCallback = Rc<dyn Fn(bool)>;

/// Uncompiled curve description.
#[derive(Clone)]
pub enum CurveSpec {
    /// Easing name such as `cubic.out` or `pow(2).in`
    Name(String),
    /// SVG path data in a 100x100 box, e.g. `M0,100 L100,0`
    Path(String),
    /// Cubic-bezier control points (x1, y1, x2, y2)
    Bezier([f64; 4]),
    /// Ready-made curve function
    Function(Rc<dyn Fn(f64) -> f64>),
}

impl CurveSpec {
    /// Path data starts with a move-to command; everything else is an easing name.
    pub fn from_text(text: &str) -> Self {
        let t = text.trim_start();
        if t.starts_with('M') || t.starts_with('m') {
            CurveSpec::Path(text.to_string())
        } else {
            CurveSpec::Name(text.to_string())
        }
    }

    pub fn function(f: impl Fn(f64) -> f64 + 'static) -> Self {
        CurveSpec::Function(Rc::new(f))
    }
}

impl fmt::Debug for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveSpec::Name(n) => f.debug_tuple("Name").field(n).finish(),
            CurveSpec::Path(p) => f.debug_tuple("Path").field(p).finish(),
            CurveSpec::Bezier(c) => f.debug_tuple("Bezier").field(c).finish(),
            CurveSpec::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for CurveSpec {
    fn from(v: &str) -> Self {
        CurveSpec::from_text(v)
    }
}

impl From<[f64; 4]> for CurveSpec {
    fn from(v: [f64; 4]) -> Self {
        CurveSpec::Bezier(v)
    }
}

/// One entry of a property spec.
#[derive(Clone)]
pub enum SpecValue {
    Value(RawValue),
    Flag(bool),
    Curve(CurveSpec),
    Progress(ProgressCallback),
    Event(EventCallback),
}

impl SpecValue {
    pub fn as_raw(&self) -> Option<&RawValue> {
        match self {
            SpecValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Debug for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Value(v) => f.debug_tuple("Value").field(v).finish(),
            SpecValue::Flag(b) => f.debug_tuple("Flag").field(b).finish(),
            SpecValue::Curve(c) => f.debug_tuple("Curve").field(c).finish(),
            SpecValue::Progress(_) => f.write_str("Progress(..)"),
            SpecValue::Event(_) => f.write_str("Event(..)"),
        }
    }
}

macro_rules! spec_value_from_raw {
    ($($t:ty),*) => {
        $(impl From<$t> for SpecValue {
            fn from(v: $t) -> Self {
                SpecValue::Value(RawValue::from(v))
            }
        })*
    };
}

spec_value_from_raw!(f64, f32, i32, i64, u32, &str, String, Stagger);

impl From<RawValue> for SpecValue {
    fn from(v: RawValue) -> Self {
        SpecValue::Value(v)
    }
}

impl From<bool> for SpecValue {
    fn from(v: bool) -> Self {
        SpecValue::Flag(v)
    }
}

impl From<CurveSpec> for SpecValue {
    fn from(v: CurveSpec) -> Self {
        SpecValue::Curve(v)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("property spec must be a JSON object")]
    NotAnObject,
    #[error("unsupported value for `{key}`: {reason}")]
    UnsupportedValue { key: String, reason: String },
}

/// Ordered key/value description of one animated property.
#[derive(Clone, Debug, Default)]
pub struct PropertySpec {
    entries: IndexMap<String, SpecValue>,
}

impl PropertySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{ <start>: <end> }`
    pub fn pair(start: impl Into<String>, end: impl Into<RawValue>) -> Self {
        Self::new().set(start, SpecValue::Value(end.into()))
    }

    /// `{ from: <from>, to: <to> }`
    pub fn from_to(from: impl Into<RawValue>, to: impl Into<RawValue>) -> Self {
        Self::new()
            .set("from", SpecValue::Value(from.into()))
            .set("to", SpecValue::Value(to.into()))
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn curve(self, curve: impl Into<CurveSpec>) -> Self {
        self.set("curve", SpecValue::Curve(curve.into()))
    }

    pub fn on_update(self, f: impl Fn(f64, f64, bool) + 'static) -> Self {
        self.set("onUpdate", SpecValue::Progress(Rc::new(f)))
    }

    pub fn on_start(self, f: impl Fn(bool) + 'static) -> Self {
        self.set("onStart", SpecValue::Event(Rc::new(f)))
    }

    pub fn on_complete(self, f: impl Fn(bool) + 'static) -> Self {
        self.set("onComplete", SpecValue::Event(Rc::new(f)))
    }

    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SpecValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.entries.get(key)
    }

    /// Remove a key, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<SpecValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a spec from a JSON object, keeping key order.
    ///
    /// - number -> `Value(Number)`, string -> `Value(Text)`, bool -> `Flag`
    /// - `[x1, y1, x2, y2]` -> `Curve(Bezier)`
    /// - `{ "stagger": [base, step] }` -> `Value(Stagger::step(base, step))`
    /// - `null` entries are dropped
    pub fn from_json(json: &JsonValue) -> Result<Self, SpecError> {
        let obj = json.as_object().ok_or(SpecError::NotAnObject)?;
        let mut spec = PropertySpec::new();
        for (key, v) in obj {
            let value = match v {
                JsonValue::Null => continue,
                JsonValue::Bool(b) => SpecValue::Flag(*b),
                JsonValue::Number(n) => {
                    let n = n.as_f64().ok_or_else(|| unsupported(key, "number out of range"))?;
                    SpecValue::Value(RawValue::Number(n))
                }
                JsonValue::String(s) => SpecValue::Value(RawValue::Text(s.clone())),
                JsonValue::Array(items) => SpecValue::Curve(CurveSpec::Bezier(bezier_points(
                    key, items,
                )?)),
                JsonValue::Object(map) => SpecValue::Value(RawValue::Stagger(stagger_step(
                    key, map,
                )?)),
            };
            spec.entries.insert(key.clone(), value);
        }
        Ok(spec)
    }
}

fn unsupported(key: &str, reason: &str) -> SpecError {
    SpecError::UnsupportedValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn numbers(key: &str, items: &[JsonValue], count: usize) -> Result<Vec<f64>, SpecError> {
    if items.len() != count {
        return Err(unsupported(
            key,
            &format!("expected {count} numbers, got {}", items.len()),
        ));
    }
    items
        .iter()
        .map(|item| item.as_f64().ok_or_else(|| unsupported(key, "expected a number")))
        .collect()
}

fn bezier_points(key: &str, items: &[JsonValue]) -> Result<[f64; 4], SpecError> {
    let n = numbers(key, items, 4)?;
    Ok([n[0], n[1], n[2], n[3]])
}

fn stagger_step(key: &str, map: &Map<String, JsonValue>) -> Result<Stagger, SpecError> {
    let args = map
        .get("stagger")
        .and_then(|s| s.as_array())
        .ok_or_else(|| unsupported(key, "objects must have the form {\"stagger\": [base, step]}"))?;
    let n = numbers(key, args, 2)?;
    Ok(Stagger::step(n[0], n[1]))
}
