//! Type parsers: `Split` -> `DeltaDescriptor`, plus kind selection.

mod color;
mod number;
mod unit;

pub use color::parse_color;
pub use number::parse_number;
pub use unit::{parse_unit, parse_unit_with_default};

use vizij_props_core::{parse_color_to_rgba, units::has_unit};

use crate::custom::DeltaKind;
use crate::descriptor::DeltaDescriptor;
use crate::error::DeltaError;
use crate::split::Split;

/// Parse with an explicitly declared kind.
pub fn parse_by_kind(
    kind: DeltaKind,
    name: &str,
    split: Split,
    default_unit: &str,
) -> Result<DeltaDescriptor, DeltaError> {
    Ok(match kind {
        DeltaKind::Number => parse_number(name, split),
        DeltaKind::Unit => parse_unit_with_default(name, split, default_unit),
        DeltaKind::Color => parse_color(name, split)?,
    })
}

/// Infer the kind: color when both ends are colors, else unit when either end (as text)
/// matches the unit pattern, else number. Never fails.
pub fn parse_by_guess(name: &str, split: Split, default_unit: &str) -> DeltaDescriptor {
    if let (Ok(start), Ok(end)) = (
        parse_color_to_rgba(&split.start),
        parse_color_to_rgba(&split.end),
    ) {
        return color::from_rgba(name, split, start, end);
    }
    if has_unit(&split.start.to_string()) || has_unit(&split.end.to_string()) {
        return parse_unit_with_default(name, split, default_unit);
    }
    parse_number(name, split)
}
