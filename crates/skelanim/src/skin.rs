//! Per-vertex bone influences
//!
//! Vertex data is populated while bones are registered from mesh weight
//! data (see [`SkeletonBuilder::load_bone_weights`]). Pose evaluation does
//! not depend on it.
//!
//! [`SkeletonBuilder::load_bone_weights`]: crate::skeleton::SkeletonBuilder::load_bone_weights

use crate::error::{AnimationError, Result};
use crate::options::MAX_NUM_BONES_PER_VERTEX;

/// Bone ids and weights influencing a single vertex
///
/// An empty slot has weight 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexBoneData {
    pub bone_ids: [u32; MAX_NUM_BONES_PER_VERTEX],
    pub weights: [f32; MAX_NUM_BONES_PER_VERTEX],
}

impl VertexBoneData {
    /// Add a bone influence to the first free slot
    ///
    /// A bone that already influences the vertex is left unchanged.
    /// `slots` caps the number of usable slots.
    pub fn add_bone_data(
        &mut self,
        vertex: usize,
        bone_id: u32,
        weight: f32,
        slots: usize,
    ) -> Result<()> {
        let slots = slots.min(MAX_NUM_BONES_PER_VERTEX);

        for i in 0..slots {
            if self.weights[i] != 0.0 && self.bone_ids[i] == bone_id {
                return Ok(());
            }
        }

        let free = (0..slots)
            .find(|&i| self.weights[i] == 0.0)
            .ok_or(AnimationError::TooManyBoneInfluences { vertex, max: slots })?;

        self.bone_ids[free] = bone_id;
        self.weights[free] = weight;
        Ok(())
    }

    /// Number of occupied slots
    pub fn influence_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f32 {
        self.weights.iter().sum()
    }
}

/// Vertex layout of a mesh with respect to skinning
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VertexSkinning {
    /// Mesh carries no bone data and is drawn with its node transform
    #[default]
    Rigid,
    /// One entry per vertex
    Skinned(Vec<VertexBoneData>),
}

impl VertexSkinning {
    /// Allocate empty bone data for `vertex_count` vertices
    pub fn skinned(vertex_count: usize) -> Self {
        Self::Skinned(vec![VertexBoneData::default(); vertex_count])
    }

    pub fn is_skinned(&self) -> bool {
        matches!(self, Self::Skinned(_))
    }

    /// Bone data, if the mesh is skinned
    pub fn bone_data(&self) -> Option<&[VertexBoneData]> {
        match self {
            Self::Rigid => None,
            Self::Skinned(data) => Some(data),
        }
    }

    /// Mutable bone data, if the mesh is skinned
    pub fn bone_data_mut(&mut self) -> Option<&mut [VertexBoneData]> {
        match self {
            Self::Rigid => None,
            Self::Skinned(data) => Some(data),
        }
    }
}
