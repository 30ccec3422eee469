use vizij_props_core::{coercion::to_float, units::find_unit, RawValue};

use crate::descriptor::{DeltaDescriptor, DeltaValues};
use crate::split::Split;

const DEFAULT_UNIT: &str = "px";

fn unit_of(value: &RawValue) -> Option<&str> {
    value.as_text().and_then(find_unit)
}

/// Unit-suffixed values with `px` as the fallback unit.
pub fn parse_unit(name: &str, split: Split) -> DeltaDescriptor {
    parse_unit_with_default(name, split, DEFAULT_UNIT)
}

/// The end's unit wins over the start's, which wins over `default_unit`.
pub fn parse_unit_with_default(name: &str, split: Split, default_unit: &str) -> DeltaDescriptor {
    let unit = unit_of(&split.end)
        .or_else(|| unit_of(&split.start))
        .unwrap_or(default_unit)
        .to_string();
    let start = to_float(&split.start);
    let end = to_float(&split.end);
    DeltaDescriptor {
        name: name.to_string(),
        curve: split.curve,
        tween_options: split.tween_options,
        values: DeltaValues::Unit {
            start,
            end,
            delta: end - start,
            unit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizij_tween_core::TweenOptions;

    fn split(start: impl Into<RawValue>, end: impl Into<RawValue>) -> Split {
        Split {
            start: start.into(),
            end: end.into(),
            curve: None,
            tween_options: TweenOptions::default(),
        }
    }

    fn unit(d: &DeltaDescriptor) -> &str {
        match &d.values {
            DeltaValues::Unit { unit, .. } => unit,
            other => panic!("expected unit values, got {other:?}"),
        }
    }

    #[test]
    fn end_unit_wins() {
        let d = parse_unit("x", split("20", "30rem"));
        assert_eq!(
            d.values,
            DeltaValues::Unit {
                start: 20.0,
                end: 30.0,
                delta: 10.0,
                unit: "rem".into()
            }
        );
        assert_eq!(unit(&parse_unit("x", split("20%", "30rem"))), "rem");
    }

    #[test]
    fn start_unit_when_end_has_none() {
        assert_eq!(unit(&parse_unit("x", split("20%", 30))), "%");
    }

    #[test]
    fn default_unit_fallback() {
        assert_eq!(unit(&parse_unit("x", split(20, 30))), "px");
        assert_eq!(unit(&parse_unit_with_default("x", split(20, 30), "em")), "em");
    }
}
