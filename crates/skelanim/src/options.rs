//! Configuration for skeleton construction and pose evaluation

/// Maximum number of bones a skeleton may register by default
pub const DEFAULT_MAX_BONES: usize = 200;

/// Number of bone slots stored per vertex
pub const MAX_NUM_BONES_PER_VERTEX: usize = 4;

/// How the node hierarchy is walked during evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// Skip nodes that are neither bones nor ancestors of bones
    #[default]
    Pruned,
    /// Visit every node in the hierarchy
    Full,
}

/// Options for controlling pose evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatorOptions {
    /// Hierarchy walk mode. Both modes write identical bone matrices.
    pub traversal: Traversal,
}

impl EvaluatorOptions {
    /// Options that walk every node instead of pruning
    pub fn full_traversal() -> Self {
        Self {
            traversal: Traversal::Full,
        }
    }
}

/// Limits enforced while a skeleton is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkeletonLimits {
    /// Maximum number of distinct bones
    pub max_bones: usize,
    /// Maximum number of bone influences per vertex
    pub max_bones_per_vertex: usize,
}

impl Default for SkeletonLimits {
    fn default() -> Self {
        Self {
            max_bones: DEFAULT_MAX_BONES,
            max_bones_per_vertex: MAX_NUM_BONES_PER_VERTEX,
        }
    }
}
