//! Static bone table and node hierarchy
//!
//! A [`Skeleton`] is built once by a [`SkeletonBuilder`] and is read-only
//! afterwards. Nodes live in an arena indexed by [`NodeId`] with the root
//! at index 0; children refer to each other by index.

mod builder;

pub use builder::SkeletonBuilder;

use glam::Mat4;
use std::collections::HashMap;

/// Index of a node in the skeleton's node arena
pub type NodeId = usize;

/// Id of the hierarchy root
pub const ROOT_NODE: NodeId = 0;

/// A named skeletal joint
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    /// Bone name, matching a hierarchy node
    pub name: String,
    /// Stable index into the bone transform cache
    pub index: usize,
    /// Maps a vertex from mesh space into this bone's bind space
    pub offset_matrix: Mat4,
}

/// A node of the skeleton hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    /// Node name, unique within the skeleton
    pub name: String,
    /// Transform relative to the parent in the bind pose
    pub local_bind_transform: Mat4,
    /// Child nodes in authoring order
    pub children: Vec<NodeId>,
    /// Parent node, `None` for the root
    pub parent: Option<NodeId>,
    pub(crate) is_required: bool,
}

impl HierarchyNode {
    pub(crate) fn new(name: String, local_bind_transform: Mat4, parent: Option<NodeId>) -> Self {
        Self {
            name,
            local_bind_transform,
            children: Vec::new(),
            parent,
            is_required: false,
        }
    }

    /// Whether this node is a bone or an ancestor of a bone
    pub fn is_required(&self) -> bool {
        self.is_required
    }
}

/// Bone table plus node hierarchy of an animated model
#[derive(Debug, Clone)]
pub struct Skeleton {
    nodes: Vec<HierarchyNode>,
    node_lookup: HashMap<String, NodeId>,
    bones: Vec<Bone>,
    bone_lookup: HashMap<String, usize>,
    /// Bone index per node, parallel to `nodes`
    node_bones: Vec<Option<usize>>,
    global_inverse_transform: Mat4,
}

impl Skeleton {
    /// Root of the hierarchy
    pub fn root(&self) -> &HierarchyNode {
        &self.nodes[ROOT_NODE]
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.nodes.get(id)
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[HierarchyNode] {
        &self.nodes
    }

    /// Find a node id by name
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_lookup.get(name).copied()
    }

    /// All bones ordered by index
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Get a bone by index
    pub fn bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    /// Find a bone by name
    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.bone_lookup.get(name).map(|&index| &self.bones[index])
    }

    /// The bone attached to a node, if the node is a bone
    pub fn bone_for_node(&self, id: NodeId) -> Option<&Bone> {
        self.node_bones
            .get(id)
            .copied()
            .flatten()
            .map(|index| &self.bones[index])
    }

    /// Get number of bones
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Get number of hierarchy nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes that are bones or ancestors of bones
    pub fn required_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_required).count()
    }

    /// Inverse of the root's bind transform
    pub fn global_inverse_transform(&self) -> Mat4 {
        self.global_inverse_transform
    }
}
