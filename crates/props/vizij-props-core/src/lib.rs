//! vizij-props-core: loosely typed property values and the write targets they end up in.
//!
//! This crate holds the data model shared by the tween and delta crates: raw start/end values,
//! JavaScript-style numeric coercion, the unit pattern, the color parser, stagger generators,
//! the ordered property-spec mapping and the targets that receive interpolated values.

pub mod coercion;
pub mod color;
pub mod spec;
pub mod stagger;
pub mod target;
pub mod units;
pub mod value;

pub use color::{parse_color, parse_color_to_rgba, ColorError, Rgba};
pub use spec::{CurveSpec, EventCallback, ProgressCallback, PropertySpec, SpecError, SpecValue};
pub use stagger::{resolve_stagger, Stagger};
pub use target::{shared, PropertyBag, Target, TargetRef, WriteLog, WriteOp};
pub use value::{PropValue, RawValue};
