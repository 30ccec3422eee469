use thiserror::Error;
use vizij_props_core::ColorError;
use vizij_tween_core::{CurveError, OptionsError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeltaError {
    #[error("property `{key}` has no start/end pair")]
    MissingPair { key: String },
    #[error("property `{key}` has more than one start/end candidate: {keys:?}")]
    AmbiguousPair { key: String, keys: Vec<String> },
    #[error("property `{key}` has a non-value in its start/end slot")]
    InvalidPairValue { key: String },
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Color(#[from] ColorError),
}
