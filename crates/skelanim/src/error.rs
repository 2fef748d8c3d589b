use thiserror::Error;

/// Error types for skeleton loading and pose evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Requested clip index is past the end of the model's clip list
    #[error("Invalid animation index {index}, model has {count} animation(s)")]
    InvalidAnimationIndex { index: usize, count: usize },

    /// Blend factor outside of `[0, 1]`
    #[error("Invalid blend factor {0}, expected a value in [0, 1]")]
    InvalidBlendFactor(f32),

    /// Only one of the two blended clips animates this node
    #[error("Node '{node}' is animated by only one of the start/end clips")]
    MismatchedBlendChannels { node: String },

    /// A bone was registered whose name has no node in the hierarchy
    #[error("Cannot find bone '{0}' in the node hierarchy")]
    MissingBoneNode(String),

    /// A channel has an empty key sequence
    #[error("Channel for node '{node}' has no {channel} keys")]
    EmptyKeyframeTrack { node: String, channel: &'static str },

    /// Key times within a sequence are not strictly increasing
    #[error("Channel for node '{node}' has {channel} keys out of order")]
    UnorderedKeyframes { node: String, channel: &'static str },

    /// Two hierarchy nodes share a name
    #[error("Duplicate node name '{0}' in hierarchy")]
    DuplicateNodeName(String),

    /// A skeleton was built without a root node
    #[error("Node hierarchy is empty")]
    EmptyHierarchy,

    /// A second root was added to a hierarchy
    #[error("Node '{0}' cannot be a root, the hierarchy already has one")]
    MultipleRoots(String),

    /// A node id that does not belong to the hierarchy being built
    #[error("Invalid node id {0}")]
    InvalidNode(usize),

    /// A node names a parent that has not been added yet
    #[error("Node '{node}' refers to unknown parent '{parent}'")]
    UnknownParentNode { node: String, parent: String },

    /// A vertex weight refers to a vertex outside the vertex table
    #[error("Vertex {vertex} is out of range, vertex table has {count} entries")]
    InvalidVertex { vertex: usize, count: usize },

    /// The bone table would grow past the configured limit
    #[error("The number of bones ({count}) is larger than the maximum supported ({max})")]
    TooManyBones { count: usize, max: usize },

    /// A vertex is influenced by more bones than it has slots for
    #[error("Vertex {vertex} is influenced by more than {max} bones")]
    TooManyBoneInfluences { vertex: usize, max: usize },
}

/// Result type using AnimationError
pub type Result<T> = std::result::Result<T, AnimationError>;
