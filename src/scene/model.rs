//! Renderable model data.
//!
//! The closed variant set — static geometry or keyframed vertex
//! animation — is a tagged union. Frame sampling interpolates
//! per-vertex positions linearly; parsing model files into these
//! structures is out of scope here.

use crate::error::VantageError;
use crate::math::vector::Vector3;

/// Fixed vertex geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticModel {
    vertices: Vec<Vector3>,
}

impl StaticModel {
    /// Create a static model from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Vector3>) -> Self {
        Self { vertices }
    }

    /// Model vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }
}

/// Keyframed vertex animation: one vertex set per frame, sampled by
/// interpolating between adjacent frames.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframedModel {
    frames: Vec<Vec<Vector3>>,
}

impl KeyframedModel {
    /// Create a keyframed model. The frame list must be non-empty
    /// and every frame must carry the same vertex count.
    pub fn new(frames: Vec<Vec<Vector3>>) -> Result<Self, VantageError> {
        let Some(first) = frames.first() else {
            return Err(VantageError::MalformedModel(
                "no frames".to_owned(),
            ));
        };
        let expected = first.len();
        if let Some(bad) =
            frames.iter().position(|f| f.len() != expected)
        {
            return Err(VantageError::MalformedModel(format!(
                "frame {bad} has {} vertices, expected {expected}",
                frames[bad].len()
            )));
        }
        Ok(Self { frames })
    }

    /// Number of keyframes.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Vertices per frame.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.frames.first().map_or(0, Vec::len)
    }

    /// Sample the animation at `progress` across the whole frame
    /// range. Progress is clamped to [0, 1]; positions between
    /// adjacent keyframes interpolate linearly.
    #[must_use]
    pub fn vertices_at(&self, progress: f64) -> Vec<Vector3> {
        let progress = progress.clamp(0.0, 1.0);
        let last = self.frames.len() - 1;
        let scaled = progress * last as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(last);
        let t = scaled - lower as f64;

        self.frames[lower]
            .iter()
            .zip(self.frames[upper].iter())
            .map(|(a, b)| a.lerp(*b, t))
            .collect()
    }
}

/// A renderable model.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// Fixed geometry.
    Static(StaticModel),
    /// Keyframed vertex animation.
    Keyframed(KeyframedModel),
}

impl Model {
    /// Vertices per frame (or total, for static geometry).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Static(model) => model.vertices().len(),
            Self::Keyframed(model) => model.vertex_count(),
        }
    }

    /// Geometry at the given animation progress. Static models
    /// ignore the progress value.
    #[must_use]
    pub fn vertices_at(&self, progress: f64) -> Vec<Vector3> {
        match self {
            Self::Static(model) => model.vertices().to_vec(),
            Self::Keyframed(model) => model.vertices_at(progress),
        }
    }
}
