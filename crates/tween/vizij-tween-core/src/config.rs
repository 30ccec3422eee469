//! Defaults applied by `Tween` when a timing option is not given.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Milliseconds.
    pub duration: f64,
    /// Milliseconds.
    pub delay: f64,
    pub repeat: u32,
    pub speed: f64,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: 350.0,
            delay: 0.0,
            repeat: 0,
            speed: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: TweenConfig = serde_json::from_str(r#"{ "duration": 1000 }"#).unwrap();
        assert_eq!(cfg.duration, 1000.0);
        assert_eq!(cfg.delay, 0.0);
        assert_eq!(cfg.speed, 1.0);
        assert_eq!(cfg.repeat, 0);
    }
}
