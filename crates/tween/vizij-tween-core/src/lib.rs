//! vizij-tween-core: easing curves and a progress-driven tween.
//!
//! - `easing`: compiles a `CurveSpec` (name, power, bezier, SVG path, function) into a `Curve`
//! - `options`: pulls the reserved timing keys out of a `PropertySpec`
//! - `tween`: turns elapsed time or explicit progress into `(eased, raw, is_forward)` ticks

pub mod config;
pub mod easing;
pub mod error;
pub mod options;
pub mod tween;

pub use config::TweenConfig;
pub use easing::{compile_curve, pow_in, pow_inout, pow_out, Curve};
pub use error::{CurveError, OptionsError};
pub use options::{separate_tween_options, TweenOptions, MAX_REPEAT, TWEEN_KEYS};
pub use tween::{Tween, TweenProps};
