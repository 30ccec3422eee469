use vizij_props_core::coercion::to_float;

use crate::descriptor::{DeltaDescriptor, DeltaValues};
use crate::split::Split;

/// Plain numbers; numeric strings are coerced.
pub fn parse_number(name: &str, split: Split) -> DeltaDescriptor {
    let start = to_float(&split.start);
    let end = to_float(&split.end);
    DeltaDescriptor {
        name: name.to_string(),
        curve: split.curve,
        tween_options: split.tween_options,
        values: DeltaValues::Number {
            start,
            end,
            delta: end - start,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizij_props_core::RawValue;
    use vizij_tween_core::{Curve, TweenOptions};

    #[test]
    fn coerces_numeric_strings() {
        let split = Split {
            start: RawValue::from("20"),
            end: RawValue::from(30),
            curve: Some(Curve::linear()),
            tween_options: TweenOptions {
                duration: Some(200.0),
                ..Default::default()
            },
        };
        let d = parse_number("radius", split);
        assert_eq!(d.name, "radius");
        assert_eq!(
            d.values,
            DeltaValues::Number {
                start: 20.0,
                end: 30.0,
                delta: 10.0
            }
        );
        assert!(d.curve.is_some());
        assert_eq!(d.tween_options.duration, Some(200.0));
    }
}
