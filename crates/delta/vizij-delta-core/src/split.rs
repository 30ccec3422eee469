//! Splitting a raw property spec into start, end, curve and timing options.

use vizij_props_core::{CurveSpec, PropertySpec, RawValue, SpecValue};
use vizij_tween_core::{compile_curve, separate_tween_options, Curve, OptionsError, TweenOptions};

use crate::error::DeltaError;

/// Normalized `{ start, end, curve, tween_options }` of one property.
#[derive(Clone, Debug)]
pub struct Split {
    pub start: RawValue,
    pub end: RawValue,
    pub curve: Option<Curve>,
    pub tween_options: TweenOptions,
}

fn pair_value(key: &str, value: SpecValue) -> Result<RawValue, DeltaError> {
    match value {
        SpecValue::Value(v) => Ok(v),
        _ => Err(DeltaError::InvalidPairValue {
            key: key.to_string(),
        }),
    }
}

/// Split the spec of property `name`. The spec itself is left untouched.
///
/// `curve` is compiled and removed first, then the reserved timing keys. What remains must be
/// either `from` + `to` or exactly one `<start>: <end>` entry.
pub fn split_delta(name: &str, spec: &PropertySpec) -> Result<Split, DeltaError> {
    let mut rest = spec.clone();

    let curve = match rest.remove("curve") {
        None => None,
        Some(SpecValue::Curve(c)) => Some(compile_curve(&c)?),
        Some(SpecValue::Value(RawValue::Text(s))) => Some(compile_curve(&CurveSpec::from_text(&s))?),
        Some(_) => {
            return Err(OptionsError::InvalidOption {
                key: "curve".to_string(),
                expected: "an easing name, path or curve",
            }
            .into())
        }
    };
    let tween_options = separate_tween_options(&mut rest)?;

    if rest.contains_key("from") && rest.contains_key("to") {
        let from = rest.remove("from");
        let to = rest.remove("to");
        if !rest.is_empty() {
            return Err(DeltaError::AmbiguousPair {
                key: name.to_string(),
                keys: rest.keys().map(str::to_string).collect(),
            });
        }
        let (Some(from), Some(to)) = (from, to) else {
            return Err(DeltaError::MissingPair {
                key: name.to_string(),
            });
        };
        return Ok(Split {
            start: pair_value(name, from)?,
            end: pair_value(name, to)?,
            curve,
            tween_options,
        });
    }

    match rest.len() {
        0 => Err(DeltaError::MissingPair {
            key: name.to_string(),
        }),
        1 => {
            let (start, end) = rest
                .iter()
                .next()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .ok_or_else(|| DeltaError::MissingPair {
                    key: name.to_string(),
                })?;
            Ok(Split {
                start: RawValue::Text(start),
                end: pair_value(name, end)?,
                curve,
                tween_options,
            })
        }
        _ => Err(DeltaError::AmbiguousPair {
            key: name.to_string(),
            keys: rest.keys().map(str::to_string).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pair_key_becomes_start() {
        let split = split_delta("x", &PropertySpec::pair("20", "30rem")).unwrap();
        assert_eq!(split.start, RawValue::Text("20".into()));
        assert_eq!(split.end, RawValue::Text("30rem".into()));
        assert!(split.curve.is_none());
        assert!(split.tween_options.is_empty());
    }

    #[test]
    fn from_to_takes_precedence() {
        let split = split_delta("x", &PropertySpec::from_to(0, 100)).unwrap();
        assert_eq!(split.start, RawValue::Number(0.0));
        assert_eq!(split.end, RawValue::Number(100.0));
    }

    #[test]
    fn reserved_keys_are_not_the_pair() {
        let spec = PropertySpec::pair("20", 30)
            .set("duration", 500)
            .set("easing", "cubic.out")
            .curve("pow(2).in");
        let split = split_delta("x", &spec).unwrap();
        assert_eq!(split.start, RawValue::Text("20".into()));
        assert_eq!(split.tween_options.duration, Some(500.0));
        let curve = split.curve.unwrap();
        assert_abs_diff_eq!(curve.call(0.5), 0.25, epsilon = 1e-12);
        // the caller's spec is not consumed
        assert_eq!(spec.len(), 4);
    }

    #[test]
    fn curve_given_as_path_text() {
        let spec = PropertySpec::pair("0", 1).set("curve", "M0,100 L100,0");
        let curve = split_delta("x", &spec).unwrap().curve.unwrap();
        assert_abs_diff_eq!(curve.call(0.3), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn no_pair_fails() {
        let spec = PropertySpec::new().set("duration", 100);
        assert_eq!(
            split_delta("x", &spec).unwrap_err(),
            DeltaError::MissingPair { key: "x".into() }
        );
    }

    #[test]
    fn several_pairs_fail() {
        let spec = PropertySpec::pair("0", 1).set("5", 10);
        assert_eq!(
            split_delta("x", &spec).unwrap_err(),
            DeltaError::AmbiguousPair {
                key: "x".into(),
                keys: vec!["0".into(), "5".into()]
            }
        );

        let spec = PropertySpec::from_to(0, 1).set("5", 10);
        assert!(matches!(
            split_delta("x", &spec),
            Err(DeltaError::AmbiguousPair { .. })
        ));
    }

    #[test]
    fn non_value_end_fails() {
        let spec = PropertySpec::new().set("0", true);
        assert_eq!(
            split_delta("x", &spec).unwrap_err(),
            DeltaError::InvalidPairValue { key: "x".into() }
        );
    }

    #[test]
    fn bad_curve_fails() {
        let spec = PropertySpec::pair("0", 1).curve("wobble.in");
        assert!(matches!(split_delta("x", &spec), Err(DeltaError::Curve(_))));

        let spec = PropertySpec::pair("0", 1).set("curve", 3);
        assert!(matches!(split_delta("x", &spec), Err(DeltaError::Options(_))));
    }
}
