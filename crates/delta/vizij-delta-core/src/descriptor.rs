//! Typed delta descriptors.

use serde::{Deserialize, Serialize};
use vizij_props_core::Rgba;
use vizij_tween_core::{Curve, TweenOptions};

use crate::custom::DeltaKind;

/// Start, end and `end - start` of one property, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeltaValues {
    Number {
        start: f64,
        end: f64,
        delta: f64,
    },
    Unit {
        start: f64,
        end: f64,
        delta: f64,
        unit: String,
    },
    /// Channel deltas are signed and never clamped.
    Color { start: Rgba, end: Rgba, delta: Rgba },
}

impl DeltaValues {
    pub fn kind(&self) -> DeltaKind {
        match self {
            DeltaValues::Number { .. } => DeltaKind::Number,
            DeltaValues::Unit { .. } => DeltaKind::Unit,
            DeltaValues::Color { .. } => DeltaKind::Color,
        }
    }
}

/// Parsed form of one property. Immutable once built.
#[derive(Clone, Debug)]
pub struct DeltaDescriptor {
    pub name: String,
    pub curve: Option<Curve>,
    pub tween_options: TweenOptions,
    pub values: DeltaValues,
}

impl DeltaDescriptor {
    pub fn kind(&self) -> DeltaKind {
        self.values.kind()
    }
}
