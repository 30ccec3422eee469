use vizij_props_core::{parse_color_to_rgba, ColorError, Rgba};

use crate::descriptor::{DeltaDescriptor, DeltaValues};
use crate::split::Split;

/// Both ends must be colors. Channel deltas are `end - start`, unrounded.
pub fn parse_color(name: &str, split: Split) -> Result<DeltaDescriptor, ColorError> {
    let start = parse_color_to_rgba(&split.start)?;
    let end = parse_color_to_rgba(&split.end)?;
    Ok(from_rgba(name, split, start, end))
}

pub(crate) fn from_rgba(name: &str, split: Split, start: Rgba, end: Rgba) -> DeltaDescriptor {
    DeltaDescriptor {
        name: name.to_string(),
        curve: split.curve,
        tween_options: split.tween_options,
        values: DeltaValues::Color {
            start,
            end,
            delta: end.sub(start),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use vizij_props_core::RawValue;
    use vizij_tween_core::TweenOptions;

    fn split(start: &str, end: &str) -> Split {
        Split {
            start: RawValue::from(start),
            end: RawValue::from(end),
            curve: None,
            tween_options: TweenOptions::default(),
        }
    }

    #[test]
    fn signed_channel_deltas() {
        let d = parse_color("fill", split("cyan", "rgba(20,10,5,.25)")).unwrap();
        let DeltaValues::Color { start, delta, .. } = d.values else {
            panic!("expected color values");
        };
        assert_eq!(start, Rgba::new(0.0, 255.0, 255.0, 1.0));
        assert_eq!(delta.r, 20.0);
        assert_eq!(delta.g, -245.0);
        assert_eq!(delta.b, -250.0);
        assert_abs_diff_eq!(delta.a, -0.75, epsilon = 1e-12);
    }

    #[test]
    fn either_end_not_a_color_fails() {
        assert!(parse_color("fill", split("cyan", "30rem")).is_err());
        assert!(parse_color("fill", split("nope", "red")).is_err());
    }
}
