//! Per-key property declarations that override type inference and output routing.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use vizij_props_core::PropValue;

/// The three delta variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaKind {
    Number,
    Unit,
    Color,
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeltaKind::Number => "number",
            DeltaKind::Unit => "unit",
            DeltaKind::Color => "color",
        })
    }
}

/// `{ "type": "number" | "unit" | "color", "default": .., "isSkipRender": bool }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomProperty {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DeltaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<PropValue>,
    #[serde(rename = "isSkipRender")]
    pub is_skip_render: bool,
}

impl CustomProperty {
    pub fn of_kind(kind: DeltaKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn skip_render(mut self) -> Self {
        self.is_skip_render = true;
        self
    }
}

pub type CustomProperties = HashMap<String, CustomProperty>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_js_field_names() {
        let table: CustomProperties = serde_json::from_str(
            r#"{
                "x":      { "type": "unit", "default": "0px" },
                "shape":  { "isSkipRender": true },
                "radius": { "type": "number", "default": 50 }
            }"#,
        )
        .unwrap();

        assert_eq!(table["x"].kind, Some(DeltaKind::Unit));
        assert_eq!(table["x"].default, Some(PropValue::Text("0px".into())));
        assert!(!table["x"].is_skip_render);
        assert_eq!(table["shape"].kind, None);
        assert!(table["shape"].is_skip_render);
        assert_eq!(table["radius"].default, Some(PropValue::Number(50.0)));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let res: Result<CustomProperty, _> = serde_json::from_str(r#"{ "type": "vector" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn builders() {
        let p = CustomProperty::of_kind(DeltaKind::Color).skip_render();
        assert_eq!(p.kind, Some(DeltaKind::Color));
        assert!(p.is_skip_render);
        assert_eq!(DeltaKind::Color.to_string(), "color");
    }
}
