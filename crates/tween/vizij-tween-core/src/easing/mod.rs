//! Easing curves.
//!
//! `compile_curve` turns any `CurveSpec` into a `Curve`, a cheap-to-clone `f64 -> f64`
//! function. Named easings follow the `<family>.<in|out|inout>` convention:
//!
//! ```text
//! linear.none  ease.in  sin.out  quad.inout  cubic.in  quart.out  quint.inout
//! expo.in  circ.out  back.inout  elastic.out  bounce.in  pow(3).out
//! ```

pub mod bezier;
pub mod path;

use std::f64::consts::PI;
use std::fmt;
use std::rc::Rc;

use vizij_props_core::CurveSpec;

use crate::error::CurveError;
use bezier::bezier_ease;
use path::PathCurve;

/// Compiled curve function.
#[derive(Clone)]
pub struct Curve(Rc<dyn Fn(f64) -> f64>);

impl Curve {
    pub fn from_fn(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Curve(Rc::new(f))
    }

    pub fn linear() -> Self {
        Curve::from_fn(|k| k)
    }

    #[inline]
    pub fn call(&self, progress: f64) -> f64 {
        (self.0)(progress)
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Curve(..)")
    }
}

/// Compile a curve description.
pub fn compile_curve(spec: &CurveSpec) -> Result<Curve, CurveError> {
    match spec {
        CurveSpec::Name(name) => parse_easing_name(name),
        CurveSpec::Path(path) => {
            let curve = PathCurve::parse(path)?;
            Ok(Curve::from_fn(move |p| curve.sample(p)))
        }
        CurveSpec::Bezier(ctrl) => {
            let ctrl = *ctrl;
            Ok(Curve::from_fn(move |p| bezier_ease(p, ctrl)))
        }
        CurveSpec::Function(f) => Ok(Curve(f.clone())),
    }
}

pub fn pow_in(p: f64) -> Curve {
    Curve::from_fn(move |k| k.powf(p))
}

pub fn pow_out(p: f64) -> Curve {
    Curve::from_fn(move |k| 1.0 - (1.0 - k).powf(p))
}

pub fn pow_inout(p: f64) -> Curve {
    Curve::from_fn(move |k| {
        let k = k * 2.0;
        if k < 1.0 {
            0.5 * k.powf(p)
        } else {
            1.0 - 0.5 * (2.0 - k).powf(p).abs()
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Variant {
    In,
    Out,
    InOut,
}

fn parse_easing_name(name: &str) -> Result<Curve, CurveError> {
    let unknown = || CurveError::UnknownEasing {
        name: name.to_string(),
    };
    let lower = name.trim().to_ascii_lowercase();
    if lower == "linear" || lower == "linear.none" {
        return Ok(Curve::linear());
    }
    let (family, variant) = lower.rsplit_once('.').ok_or_else(unknown)?;
    let variant = match variant {
        "in" => Variant::In,
        "out" => Variant::Out,
        "inout" => Variant::InOut,
        _ => return Err(unknown()),
    };

    if let Some(arg) = family
        .strip_prefix("pow(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let p: f64 = arg.trim().parse().map_err(|_| unknown())?;
        return Ok(match variant {
            Variant::In => pow_in(p),
            Variant::Out => pow_out(p),
            Variant::InOut => pow_inout(p),
        });
    }

    let f: fn(f64) -> f64 = match (family, variant) {
        ("ease", Variant::In) => |k| bezier_ease(k, [0.42, 0.0, 1.0, 1.0]),
        ("ease", Variant::Out) => |k| bezier_ease(k, [0.0, 0.0, 0.58, 1.0]),
        ("ease", Variant::InOut) => |k| bezier_ease(k, [0.42, 0.0, 0.58, 1.0]),
        ("sin", Variant::In) => |k| 1.0 - (k * PI / 2.0).cos(),
        ("sin", Variant::Out) => |k| (k * PI / 2.0).sin(),
        ("sin", Variant::InOut) => |k| 0.5 * (1.0 - (PI * k).cos()),
        ("quad", Variant::In) => |k| k * k,
        ("quad", Variant::Out) => |k| k * (2.0 - k),
        ("quad", Variant::InOut) => quad_inout,
        ("cubic", Variant::In) => |k| k * k * k,
        ("cubic", Variant::Out) => |k| {
            let k = k - 1.0;
            k * k * k + 1.0
        },
        ("cubic", Variant::InOut) => cubic_inout,
        ("quart", Variant::In) => |k| k * k * k * k,
        ("quart", Variant::Out) => |k| {
            let k = k - 1.0;
            1.0 - k * k * k * k
        },
        ("quart", Variant::InOut) => quart_inout,
        ("quint", Variant::In) => |k| k * k * k * k * k,
        ("quint", Variant::Out) => |k| {
            let k = k - 1.0;
            k * k * k * k * k + 1.0
        },
        ("quint", Variant::InOut) => quint_inout,
        ("expo", Variant::In) => |k| if k == 0.0 { 0.0 } else { 1024f64.powf(k - 1.0) },
        ("expo", Variant::Out) => |k| if k == 1.0 { 1.0 } else { 1.0 - 2f64.powf(-10.0 * k) },
        ("expo", Variant::InOut) => expo_inout,
        ("circ", Variant::In) => |k| 1.0 - (1.0 - k * k).sqrt(),
        ("circ", Variant::Out) => |k| {
            let k = k - 1.0;
            (1.0 - k * k).sqrt()
        },
        ("circ", Variant::InOut) => circ_inout,
        ("back", Variant::In) => back_in,
        ("back", Variant::Out) => back_out,
        ("back", Variant::InOut) => back_inout,
        ("elastic", Variant::In) => elastic_in,
        ("elastic", Variant::Out) => elastic_out,
        ("elastic", Variant::InOut) => elastic_inout,
        ("bounce", Variant::In) => |k| 1.0 - bounce_out(1.0 - k),
        ("bounce", Variant::Out) => bounce_out,
        ("bounce", Variant::InOut) => |k| {
            if k < 0.5 {
                (1.0 - bounce_out(1.0 - k * 2.0)) * 0.5
            } else {
                bounce_out(k * 2.0 - 1.0) * 0.5 + 0.5
            }
        },
        _ => return Err(unknown()),
    };
    Ok(Curve::from_fn(f))
}

fn quad_inout(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k
    } else {
        let k = k - 1.0;
        -0.5 * (k * (k - 2.0) - 1.0)
    }
}

fn cubic_inout(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k * k
    } else {
        let k = k - 2.0;
        0.5 * (k * k * k + 2.0)
    }
}

fn quart_inout(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k * k * k
    } else {
        let k = k - 2.0;
        -0.5 * (k * k * k * k - 2.0)
    }
}

fn quint_inout(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * k * k * k * k * k
    } else {
        let k = k - 2.0;
        0.5 * (k * k * k * k * k + 2.0)
    }
}

fn expo_inout(k: f64) -> f64 {
    if k == 0.0 {
        return 0.0;
    }
    if k == 1.0 {
        return 1.0;
    }
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * 1024f64.powf(k - 1.0)
    } else {
        0.5 * (2.0 - 2f64.powf(-10.0 * (k - 1.0)))
    }
}

fn circ_inout(k: f64) -> f64 {
    let k = k * 2.0;
    if k < 1.0 {
        -0.5 * ((1.0 - k * k).sqrt() - 1.0)
    } else {
        let k = k - 2.0;
        0.5 * ((1.0 - k * k).sqrt() + 1.0)
    }
}

const BACK_S: f64 = 1.70158;

fn back_in(k: f64) -> f64 {
    k * k * ((BACK_S + 1.0) * k - BACK_S)
}

fn back_out(k: f64) -> f64 {
    let k = k - 1.0;
    k * k * ((BACK_S + 1.0) * k + BACK_S) + 1.0
}

fn back_inout(k: f64) -> f64 {
    let s = BACK_S * 1.525;
    let k = k * 2.0;
    if k < 1.0 {
        0.5 * (k * k * ((s + 1.0) * k - s))
    } else {
        let k = k - 2.0;
        0.5 * (k * k * ((s + 1.0) * k + s) + 2.0)
    }
}

const ELASTIC_P: f64 = 0.4;
const ELASTIC_S: f64 = ELASTIC_P / 4.0;

fn elastic_in(k: f64) -> f64 {
    if k == 0.0 || k == 1.0 {
        return k;
    }
    let k = k - 1.0;
    -(2f64.powf(10.0 * k) * ((k - ELASTIC_S) * (2.0 * PI) / ELASTIC_P).sin())
}

fn elastic_out(k: f64) -> f64 {
    if k == 0.0 || k == 1.0 {
        return k;
    }
    2f64.powf(-10.0 * k) * ((k - ELASTIC_S) * (2.0 * PI) / ELASTIC_P).sin() + 1.0
}

fn elastic_inout(k: f64) -> f64 {
    if k == 0.0 || k == 1.0 {
        return k;
    }
    let k = k * 2.0 - 1.0;
    let wave = ((k - ELASTIC_S) * (2.0 * PI) / ELASTIC_P).sin();
    if k < 0.0 {
        -0.5 * 2f64.powf(10.0 * k) * wave
    } else {
        0.5 * 2f64.powf(-10.0 * k) * wave + 1.0
    }
}

fn bounce_out(k: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if k < 1.0 / D {
        N * k * k
    } else if k < 2.0 / D {
        let k = k - 1.5 / D;
        N * k * k + 0.75
    } else if k < 2.5 / D {
        let k = k - 2.25 / D;
        N * k * k + 0.9375
    } else {
        let k = k - 2.625 / D;
        N * k * k + 0.984375
    }
}
