//! Timing options: the reserved keys of a property spec that configure a tween.

use std::fmt;

use vizij_props_core::{
    coercion::to_float, CurveSpec, EventCallback, ProgressCallback, PropertySpec, RawValue,
    SpecValue,
};

use crate::error::OptionsError;

/// Keys consumed by `separate_tween_options`.
pub const TWEEN_KEYS: &[&str] = &[
    "duration",
    "delay",
    "repeat",
    "speed",
    "isYoyo",
    "easing",
    "backwardEasing",
    "onStart",
    "onUpdate",
    "onComplete",
];

/// Largest accepted `repeat` count.
pub const MAX_REPEAT: u32 = 1_000_000;

/// Timing options as declared by a spec; `None` means "use the tween default".
#[derive(Clone, Default)]
pub struct TweenOptions {
    pub duration: Option<f64>,
    pub delay: Option<f64>,
    pub repeat: Option<u32>,
    pub speed: Option<f64>,
    pub is_yoyo: Option<bool>,
    pub easing: Option<CurveSpec>,
    pub backward_easing: Option<CurveSpec>,
    pub on_start: Option<EventCallback>,
    pub on_update: Option<ProgressCallback>,
    pub on_complete: Option<EventCallback>,
}

impl TweenOptions {
    /// True when the spec declared no timing option at all.
    pub fn is_empty(&self) -> bool {
        self.duration.is_none()
            && self.delay.is_none()
            && self.repeat.is_none()
            && self.speed.is_none()
            && self.is_yoyo.is_none()
            && self.easing.is_none()
            && self.backward_easing.is_none()
            && self.on_start.is_none()
            && self.on_update.is_none()
            && self.on_complete.is_none()
    }

    /// Copy with the progress callback replaced.
    pub fn with_on_update(&self, on_update: ProgressCallback) -> Self {
        Self {
            on_update: Some(on_update),
            ..self.clone()
        }
    }
}

impl fmt::Debug for TweenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenOptions")
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("repeat", &self.repeat)
            .field("speed", &self.speed)
            .field("is_yoyo", &self.is_yoyo)
            .field("easing", &self.easing)
            .field("backward_easing", &self.backward_easing)
            .field("on_start", &self.on_start.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

fn invalid(key: &str, expected: &'static str) -> OptionsError {
    OptionsError::InvalidOption {
        key: key.to_string(),
        expected,
    }
}

fn number(key: &str, value: SpecValue) -> Result<f64, OptionsError> {
    match value {
        SpecValue::Value(raw @ (RawValue::Number(_) | RawValue::Text(_))) => {
            let n = to_float(&raw);
            if n.is_finite() {
                Ok(n)
            } else {
                Err(invalid(key, "a finite number"))
            }
        }
        _ => Err(invalid(key, "a finite number")),
    }
}

fn curve(key: &str, value: SpecValue) -> Result<CurveSpec, OptionsError> {
    match value {
        SpecValue::Curve(c) => Ok(c),
        SpecValue::Value(RawValue::Text(s)) => Ok(CurveSpec::from_text(&s)),
        _ => Err(invalid(key, "an easing name, path or curve")),
    }
}

fn event(key: &str, value: SpecValue) -> Result<EventCallback, OptionsError> {
    match value {
        SpecValue::Event(cb) => Ok(cb),
        _ => Err(invalid(key, "a lifecycle callback")),
    }
}

/// Remove the reserved timing keys from `spec` and return them typed.
/// Whatever is left in `spec` afterwards is the start/end pair.
pub fn separate_tween_options(spec: &mut PropertySpec) -> Result<TweenOptions, OptionsError> {
    let mut opts = TweenOptions::default();
    for &key in TWEEN_KEYS {
        let Some(value) = spec.remove(key) else {
            continue;
        };
        match key {
            "duration" => opts.duration = Some(number(key, value)?),
            "delay" => opts.delay = Some(number(key, value)?),
            "speed" => opts.speed = Some(number(key, value)?),
            "repeat" => {
                let n = number(key, value)?;
                if n < 0.0 || n.fract() != 0.0 || n > f64::from(MAX_REPEAT) {
                    return Err(invalid(key, "a whole repeat count up to 1000000"));
                }
                opts.repeat = Some(n as u32);
            }
            "isYoyo" => match value {
                SpecValue::Flag(b) => opts.is_yoyo = Some(b),
                _ => return Err(invalid(key, "a boolean")),
            },
            "easing" => opts.easing = Some(curve(key, value)?),
            "backwardEasing" => opts.backward_easing = Some(curve(key, value)?),
            "onStart" => opts.on_start = Some(event(key, value)?),
            "onComplete" => opts.on_complete = Some(event(key, value)?),
            "onUpdate" => match value {
                SpecValue::Progress(cb) => opts.on_update = Some(cb),
                _ => return Err(invalid(key, "a progress callback")),
            },
            _ => {}
        }
    }
    Ok(opts)
}
