//! vizij-delta-core: one animated property, resolved into a typed delta and written on update.
//!
//! A `Delta` takes a property key and a loosely typed `PropertySpec`, splits it into
//! start/end/curve/timing options, infers (or is told) whether the property is a plain number,
//! a unit-suffixed measurement or a color, and binds the matching update variant once.
//! Each `update(eased, raw, is_forward)` performs exactly one write into the target.
//!
//! Specs that declare timing options also get a `Tween` whose progress callback drives the
//! delta.

pub mod config;
pub mod custom;
pub mod delta;
pub mod descriptor;
pub mod error;
pub mod parse;
pub mod split;

pub use config::DeltaConfig;
pub use custom::{CustomProperties, CustomProperty, DeltaKind};
pub use delta::{Delta, DeltaProps};
pub use descriptor::{DeltaDescriptor, DeltaValues};
pub use error::DeltaError;
pub use parse::{parse_color, parse_number, parse_unit, parse_unit_with_default};
pub use split::{split_delta, Split};

// Re-exports so callers can build specs and targets from one crate.
pub use vizij_props_core::{
    shared, CurveSpec, PropValue, PropertyBag, PropertySpec, RawValue, Rgba, Stagger, Target,
    TargetRef, WriteLog, WriteOp,
};
pub use vizij_tween_core::{Curve, Tween, TweenConfig, TweenOptions};
