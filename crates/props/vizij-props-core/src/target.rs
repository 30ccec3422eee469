//! Write targets: the externally owned stores that receive interpolated values.
//!
//! A delta performs exactly one `set` per update and never reads back. `PropertyBag` is a
//! plain key/value store; `WriteLog` keeps every write in order, which is handy when the
//! sequence itself matters.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::PropValue;

/// Anything a property value can be written into.
pub trait Target {
    fn set(&mut self, key: &str, value: PropValue);
}

/// Shared handle to a target. Deltas only hold it; they never own the target's lifecycle.
pub type TargetRef = Rc<RefCell<dyn Target>>;

/// Wrap a concrete target into a shared handle. Keep the returned `Rc` to read the target
/// back; it coerces to `TargetRef` on clone.
pub fn shared<T: Target>(target: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(target))
}

/// Key/value store of written properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyBag(pub HashMap<String, PropValue>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Target for PropertyBag {
    fn set(&mut self, key: &str, value: PropValue) {
        self.0.insert(key.to_string(), value);
    }
}

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteOp {
    pub key: String,
    pub value: PropValue,
}

impl WriteOp {
    pub fn new(key: impl Into<String>, value: PropValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ key: {}, value: {} }}", self.key, self.value)
    }
}

/// Target that appends every write, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteLog(pub Vec<WriteOp>);

impl WriteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WriteOp> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&WriteOp> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Target for WriteLog {
    fn set(&mut self, key: &str, value: PropValue) {
        self.0.push(WriteOp::new(key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_keeps_last_write() {
        let mut bag = PropertyBag::new();
        bag.set("x", PropValue::Number(1.0));
        bag.set("x", PropValue::Number(2.0));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("x"), Some(&PropValue::Number(2.0)));
    }

    #[test]
    fn shared_handle_coerces_to_target_ref() {
        let log = shared(WriteLog::new());
        let target: TargetRef = log.clone();
        target.borrow_mut().set("y", PropValue::Text("10px".into()));
        target.borrow_mut().set("y", PropValue::Text("12px".into()));
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().to_string(), "{ key: y, value: 12px }");
    }

    #[test]
    fn bag_json_roundtrip() {
        let mut bag = PropertyBag::new();
        bag.set("color", PropValue::Text("rgba(0, 0, 0, 1)".into()));
        let s = serde_json::to_string(&bag).unwrap();
        let parsed: PropertyBag = serde_json::from_str(&s).unwrap();
        assert_eq!(bag, parsed);
    }
}
