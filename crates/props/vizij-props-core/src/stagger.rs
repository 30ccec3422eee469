//! Stagger values: per-index generators that let one spec produce different values across a
//! group of indexed items.

use std::fmt;
use std::rc::Rc;

use crate::RawValue;

type StaggerFn = dyn Fn(usize, usize) -> f64;

/// A value generator evaluated with `(index, total)`.
#[derive(Clone)]
pub struct Stagger(Rc<StaggerFn>);

impl Stagger {
    pub fn new(f: impl Fn(usize, usize) -> f64 + 'static) -> Self {
        Stagger(Rc::new(f))
    }

    /// `base + index * step`
    pub fn step(base: f64, step: f64) -> Self {
        Stagger::new(move |index, _total| base + index as f64 * step)
    }

    #[inline]
    pub fn eval(&self, index: usize, total: usize) -> f64 {
        (self.0)(index, total)
    }

    /// True when both handles share the same generator.
    pub fn ptr_eq(&self, other: &Stagger) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Stagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stagger(..)")
    }
}

/// Replace a stagger with its value for `index`; anything else passes through.
pub fn resolve_stagger(value: RawValue, index: usize, total: usize) -> RawValue {
    match value {
        RawValue::Stagger(s) => RawValue::Number(s.eval(index, total)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stagger_uses_index() {
        let s = Stagger::step(25.0, 200.0);
        assert_eq!(s.eval(0, 5), 25.0);
        assert_eq!(s.eval(3, 5), 625.0);
    }

    #[test]
    fn custom_stagger_sees_total() {
        let s = Stagger::new(|i, total| i as f64 / total as f64);
        assert_eq!(s.eval(1, 4), 0.25);
    }

    #[test]
    fn resolve_passes_plain_values_through() {
        assert_eq!(
            resolve_stagger(RawValue::from("30rem"), 2, 3),
            RawValue::from("30rem")
        );
        assert_eq!(resolve_stagger(RawValue::Number(7.0), 2, 3), RawValue::Number(7.0));
        assert_eq!(
            resolve_stagger(Stagger::step(200.0, 300.0).into(), 2, 3),
            RawValue::Number(800.0)
        );
    }
}
