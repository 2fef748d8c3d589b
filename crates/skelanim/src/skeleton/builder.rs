//! Load-time construction of a [`Skeleton`]

use glam::Mat4;
use log::{debug, trace};
use std::collections::HashMap;

use super::{Bone, HierarchyNode, NodeId, ROOT_NODE, Skeleton};
use crate::error::{AnimationError, Result};
use crate::options::SkeletonLimits;
use crate::skin::VertexBoneData;

/// Builds a skeleton from importer output
///
/// The hierarchy is added first, root then children. Bones are registered
/// afterwards by name; each registration marks the bone's node and all of
/// its ancestors as required for evaluation.
#[derive(Debug, Clone, Default)]
pub struct SkeletonBuilder {
    nodes: Vec<HierarchyNode>,
    node_lookup: HashMap<String, NodeId>,
    bones: Vec<Bone>,
    bone_lookup: HashMap<String, usize>,
    limits: SkeletonLimits,
}

impl SkeletonBuilder {
    /// Create a builder with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom limits
    pub fn with_limits(limits: SkeletonLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Add the hierarchy root. Must be the first node added.
    pub fn add_root(&mut self, name: impl Into<String>, bind_transform: Mat4) -> Result<NodeId> {
        let name = name.into();
        if !self.nodes.is_empty() {
            return Err(AnimationError::MultipleRoots(name));
        }
        self.push_node(name, bind_transform, None)
    }

    /// Add a node under an existing parent
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        bind_transform: Mat4,
    ) -> Result<NodeId> {
        if parent >= self.nodes.len() {
            return Err(AnimationError::InvalidNode(parent));
        }
        let id = self.push_node(name.into(), bind_transform, Some(parent))?;
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    fn push_node(
        &mut self,
        name: String,
        bind_transform: Mat4,
        parent: Option<NodeId>,
    ) -> Result<NodeId> {
        if self.node_lookup.contains_key(&name) {
            return Err(AnimationError::DuplicateNodeName(name));
        }
        let id = self.nodes.len();
        self.node_lookup.insert(name.clone(), id);
        self.nodes.push(HierarchyNode::new(name, bind_transform, parent));
        Ok(id)
    }

    /// Find a node id by name
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_lookup.get(name).copied()
    }

    /// Get number of bones registered so far
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Register a bone and return its index
    ///
    /// The first registration of a name assigns the next free index.
    /// Registering the same name again returns the existing index and
    /// keeps the first offset matrix.
    pub fn register_bone(&mut self, name: &str, offset_matrix: Mat4) -> Result<usize> {
        if let Some(&index) = self.bone_lookup.get(name) {
            return Ok(index);
        }

        let node = self
            .find_node(name)
            .ok_or_else(|| AnimationError::MissingBoneNode(name.to_string()))?;

        let index = self.bones.len();
        if index >= self.limits.max_bones {
            return Err(AnimationError::TooManyBones {
                count: index + 1,
                max: self.limits.max_bones,
            });
        }

        self.bones.push(Bone {
            name: name.to_string(),
            index,
            offset_matrix,
        });
        self.bone_lookup.insert(name.to_string(), index);
        self.mark_required(node);

        debug!("Registered bone '{}' with index {}", name, index);
        Ok(index)
    }

    /// Register a bone and record its vertex weights
    ///
    /// `weights` holds `(vertex_id, weight)` pairs relative to the mesh,
    /// `base_vertex` is the mesh's first vertex in `vertices`. On error
    /// neither the builder nor `vertices` is modified.
    pub fn load_bone_weights(
        &mut self,
        name: &str,
        offset_matrix: Mat4,
        base_vertex: usize,
        weights: &[(usize, f32)],
        vertices: &mut [VertexBoneData],
    ) -> Result<usize> {
        let slots = self.limits.max_bones_per_vertex;
        let count = vertices.len();
        let index = self
            .bone_lookup
            .get(name)
            .copied()
            .unwrap_or(self.bones.len());

        // Staged writes are committed once the bone is registered
        let mut staged: HashMap<usize, VertexBoneData> = HashMap::new();
        for &(vertex_id, weight) in weights {
            let global_id = base_vertex
                .checked_add(vertex_id)
                .filter(|&id| id < count)
                .ok_or(AnimationError::InvalidVertex {
                    vertex: base_vertex.saturating_add(vertex_id),
                    count,
                })?;
            staged
                .entry(global_id)
                .or_insert(vertices[global_id])
                .add_bone_data(global_id, index as u32, weight, slots)?;
        }

        let registered = self.register_bone(name, offset_matrix)?;
        debug_assert_eq!(registered, index);

        for (global_id, data) in staged {
            vertices[global_id] = data;
        }

        trace!("Bone '{}' influences {} vertices", name, weights.len());
        Ok(registered)
    }

    /// Mark a node and its ancestors as required
    fn mark_required(&mut self, node: NodeId) {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.nodes[id].is_required {
                // Ancestors of a required node are already required
                break;
            }
            self.nodes[id].is_required = true;
            current = self.nodes[id].parent;
        }
    }

    /// Finish construction
    pub fn build(self) -> Result<Skeleton> {
        let Some(root) = self.nodes.get(ROOT_NODE) else {
            return Err(AnimationError::EmptyHierarchy);
        };
        let global_inverse_transform = root.local_bind_transform.inverse();

        let mut node_bones = vec![None; self.nodes.len()];
        for bone in &self.bones {
            if let Some(&node) = self.node_lookup.get(&bone.name) {
                node_bones[node] = Some(bone.index);
            }
        }

        let skeleton = Skeleton {
            nodes: self.nodes,
            node_lookup: self.node_lookup,
            bones: self.bones,
            bone_lookup: self.bone_lookup,
            node_bones,
            global_inverse_transform,
        };

        debug!(
            "Built skeleton with {} bones, {} nodes ({} required)",
            skeleton.bone_count(),
            skeleton.node_count(),
            skeleton.required_node_count()
        );

        Ok(skeleton)
    }
}
