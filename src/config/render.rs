use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::GenartError;
use crate::types::{BlendMode, ShapeType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub shape_type: ShapeType,
    pub blend_mode: BlendMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shape_type: ShapeType::Circle,
            blend_mode: BlendMode::AlphaOver,
        }
    }
}

impl ConfigSection for RenderConfig {
    fn section_name() -> &'static str {
        "render"
    }

    fn validate(&self) -> Result<(), GenartError> {
        // Both fields are closed enums; serde rejects unknown variants on load.
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Render".to_string(),
            fields: vec![
                FieldManifest::new(
                    "shape_type",
                    "enum",
                    serde_json::json!(Self::default().shape_type),
                    None,
                    None,
                    "Primitive used for new genes: Circle or Square",
                ),
                FieldManifest::new(
                    "blend_mode",
                    "enum",
                    serde_json::json!(Self::default().blend_mode),
                    None,
                    None,
                    "Compositing rule: AlphaOver, Additive or Overwrite",
                ),
            ],
        }
    }
}
