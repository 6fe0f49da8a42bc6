use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Lighting rig parameters.
pub struct LightingOptions {
    /// Key light direction (normalized on apply).
    #[schemars(skip)]
    pub key_direction: [f64; 3],
    /// Key light intensity.
    #[schemars(title = "Key Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub key_intensity: f64,
    /// Fill light direction (normalized on apply).
    #[schemars(skip)]
    pub fill_direction: [f64; 3],
    /// Fill light intensity.
    #[schemars(title = "Fill Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub fill_intensity: f64,
    /// Ambient intensity floor.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f64,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            key_direction: [-0.3, 0.9, -0.3],
            key_intensity: 0.7,
            fill_direction: [0.3, 0.6, -0.4],
            fill_intensity: 0.3,
            ambient: 0.12,
        }
    }
}
