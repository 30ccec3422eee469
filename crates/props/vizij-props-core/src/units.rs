//! The unit pattern used to detect unit-suffixed measurements.
//!
//! The pattern is unanchored and the first match wins, so `"30rem"` yields `rem` and a color
//! name like `hotpink` yields `in`. Callers that care (delta type inference) check colors first.

use once_cell::sync::Lazy;
use regex::Regex;

static UNITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)px|%|rem|em|ex|cm|ch|mm|in|pt|pc|vh|vw|vmin|vmax|deg")
        .expect("unit pattern is a valid regex")
});

/// First unit substring found in `value`, if any.
pub fn find_unit(value: &str) -> Option<&str> {
    UNITS_RE.find(value).map(|m| m.as_str())
}

#[inline]
pub fn has_unit(value: &str) -> bool {
    UNITS_RE.is_match(value)
}
