use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and focus parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub field_of_view: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near_clip: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far_clip: f64,
    /// Initial distance from the camera to its focus point.
    #[schemars(title = "Focus Depth", range(min = 0.001, max = 1000.0), extend("step" = 0.1))]
    pub focus_depth: f64,
    /// Whether the camera starts orbit-locked on its focus point.
    #[schemars(title = "Focus Locked")]
    pub focus_locked: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            field_of_view: 35.0,
            near_clip: 0.01,
            far_clip: f64::MAX,
            focus_depth: 1.0,
            focus_locked: false,
        }
    }
}
