//! Construction defaults for deltas.

use serde::{Deserialize, Serialize};
use vizij_tween_core::TweenConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaConfig {
    /// Unit used when neither start nor end carries one.
    pub default_unit: String,
    /// Defaults for tweens created by deltas.
    pub tween: TweenConfig,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            default_unit: "px".to_string(),
            tween: TweenConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_px() {
        let cfg = DeltaConfig::default();
        assert_eq!(cfg.default_unit, "px");
        assert_eq!(cfg.tween, TweenConfig::default());
    }

    #[test]
    fn nested_tween_defaults_deserialize() {
        let cfg: DeltaConfig =
            serde_json::from_str(r#"{ "default_unit": "em", "tween": { "duration": 500 } }"#)
                .unwrap();
        assert_eq!(cfg.default_unit, "em");
        assert_eq!(cfg.tween.duration, 500.0);
        assert_eq!(cfg.tween.speed, 1.0);
    }
}
