//! Error types for curve compilation and timing options.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("unknown easing `{name}`")]
    UnknownEasing { name: String },

    #[error("invalid path curve `{path}`: {reason}")]
    InvalidPath { path: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// A reserved timing key holds a value of the wrong shape.
    #[error("timing option `{key}` expects {expected}")]
    InvalidOption { key: String, expected: &'static str },
}
