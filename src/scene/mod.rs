//! Scene graph stub.
//!
//! A [`Scene`] holds a tree of posed nodes plus the lighting rig. It
//! only tracks structure and transforms; rendering the nodes is the
//! caller's concern.

/// Directional lighting rig.
pub mod light;
/// Renderable model data.
pub mod model;
/// Position/orientation holder.
pub mod object;
/// 2D shapes.
pub mod shape;

use rustc_hash::FxHashMap;

use crate::error::VantageError;
use crate::math::matrix::Matrix4;
use crate::scene::light::LightRig;
use crate::scene::model::Model;
use crate::scene::object::Object3D;

/// Opaque scene node identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct NodeId(u64);

/// A posed node in the scene tree.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Human-readable name.
    pub name: String,
    /// World pose relative to the parent node.
    pub object: Object3D,
    /// Optional geometry attached to this node.
    pub model: Option<Model>,
    /// Whether this node (and its subtree) should be drawn.
    pub visible: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Create a visible node at the origin with no model.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object: Object3D::default(),
            model: None,
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Builder-style pose assignment.
    #[must_use]
    pub fn with_object(mut self, object: Object3D) -> Self {
        self.object = object;
        self
    }

    /// Builder-style model assignment.
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child node ids.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The scene: a node tree and a lighting rig.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: FxHashMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    lights: LightRig,
    next_id: u64,
}

impl Scene {
    /// Create an empty scene with default lighting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lighting rig.
    #[must_use]
    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    /// Mutable access to the lighting rig.
    pub fn lights_mut(&mut self) -> &mut LightRig {
        &mut self.lights
    }

    /// Number of nodes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node, optionally under a parent. An unknown parent id
    /// fails.
    pub fn insert(
        &mut self,
        node: SceneNode,
        parent: Option<NodeId>,
    ) -> Result<NodeId, VantageError> {
        if let Some(parent_id) = parent {
            if !self.nodes.contains_key(&parent_id) {
                return Err(VantageError::UnknownNode(parent_id.0));
            }
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let mut node = node;
        node.parent = parent;
        node.children.clear();
        let _ = self.nodes.insert(id, node);

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent_id)
                {
                    parent_node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Remove a node and its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), VantageError> {
        let parent = self
            .nodes
            .get(&id)
            .ok_or(VantageError::UnknownNode(id.0))?
            .parent;

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children.iter().copied());
            }
        }

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.nodes.get_mut(&parent_id)
                {
                    parent_node.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }
        Ok(())
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Root node ids.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Local-to-world transform of a node, composing every ancestor's
    /// pose from the root down.
    pub fn world_transform(
        &self,
        id: NodeId,
    ) -> Result<Matrix4, VantageError> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self
                .nodes
                .get(&current)
                .ok_or(VantageError::UnknownNode(current.0))?;
            chain.push(node.object.to_world_matrix());
            cursor = node.parent;
        }
        Ok(chain
            .into_iter()
            .rev()
            .fold(Matrix4::IDENTITY, |acc, local| acc * local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rotation::Rotation;
    use crate::math::vector::Vector3;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_insert_and_links() {
        let mut scene = Scene::new();
        let root = scene.insert(SceneNode::new("root"), None).unwrap();
        let child = scene
            .insert(SceneNode::new("child"), Some(root))
            .unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.roots(), &[root]);
        assert_eq!(scene.node(root).unwrap().children(), &[child]);
        assert_eq!(scene.node(child).unwrap().parent(), Some(root));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut scene = Scene::new();
        let root = scene.insert(SceneNode::new("root"), None).unwrap();
        scene.remove(root).unwrap();
        let result = scene.insert(SceneNode::new("orphan"), Some(root));
        assert!(matches!(result, Err(VantageError::UnknownNode(_))));
    }

    #[test]
    fn test_remove_subtree() {
        let mut scene = Scene::new();
        let root = scene.insert(SceneNode::new("root"), None).unwrap();
        let child = scene
            .insert(SceneNode::new("child"), Some(root))
            .unwrap();
        let grandchild = scene
            .insert(SceneNode::new("grandchild"), Some(child))
            .unwrap();
        scene.remove(child).unwrap();
        assert_eq!(scene.len(), 1);
        assert!(scene.node(grandchild).is_none());
        assert!(scene.node(root).unwrap().children().is_empty());
    }

    #[test]
    fn test_world_transform_composes() {
        let mut scene = Scene::new();
        let root_pose = Object3D::new(
            Vector3::new(10.0, 0.0, 0.0),
            Rotation::from_axis_angle(Vector3::Z, FRAC_PI_2).unwrap(),
        );
        let root = scene
            .insert(SceneNode::new("root").with_object(root_pose), None)
            .unwrap();
        let child_pose = Object3D::new(
            Vector3::new(5.0, 0.0, 0.0),
            Rotation::IDENTITY,
        );
        let child = scene
            .insert(
                SceneNode::new("child").with_object(child_pose),
                Some(root),
            )
            .unwrap();

        let world = scene.world_transform(child).unwrap();
        // The child's +5x offset is rotated into +5y by the root's
        // quarter turn, then shifted by the root position.
        let origin = world.transform_point(Vector3::ZERO);
        assert!(
            (origin - Vector3::new(10.0, 5.0, 0.0)).magnitude() < 1e-9
        );

        let missing = NodeId(999);
        assert!(matches!(
            scene.world_transform(missing),
            Err(VantageError::UnknownNode(999))
        ));
    }

    #[test]
    fn test_scene_has_default_lights() {
        let scene = Scene::new();
        assert_eq!(scene.lights().ambient, 0.12);
        assert!(scene.is_empty());
    }
}
