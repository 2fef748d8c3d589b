//! Skeletal animation transform pipeline
//!
//! Computes, for every bone of an animated model, the matrix that moves a
//! skinned vertex from bind pose into the pose of one clip (or a blend of
//! two clips) at a given time.
//!
//! ```
//! use glam::{Mat4, Quat, Vec3};
//! use skelanim::{AnimationClip, BoneTransformCache, HierarchyEvaluator, Key, KeyframeTrack, SkeletonBuilder};
//!
//! let mut builder = SkeletonBuilder::new();
//! builder.add_root("Root", Mat4::IDENTITY)?;
//! builder.register_bone("Root", Mat4::IDENTITY)?;
//! let skeleton = builder.build()?;
//!
//! let turn = KeyframeTrack::new(
//!     "Root",
//!     vec![Key::new(0.0, Vec3::ONE)],
//!     vec![
//!         Key::new(0.0, Quat::IDENTITY),
//!         Key::new(24.0, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
//!     ],
//!     vec![Key::new(0.0, Vec3::ZERO)],
//! )?;
//! let clip = AnimationClip::new(Some("Turn".into()), 24.0, 24.0).with_channel(turn);
//!
//! let mut cache = BoneTransformCache::default();
//! HierarchyEvaluator::default().evaluate(&skeleton, &clip, 0.5, &mut cache)?;
//! assert_eq!(cache.len(), 1);
//! # Ok::<(), skelanim::AnimationError>(())
//! ```

// Re-export main components
pub mod blend;
pub mod cache;
pub mod clip;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod options;
#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "serde")]
pub mod rig;
pub mod sampler;
pub mod skeleton;
pub mod skin;

// Re-export common types
pub use blend::BlendEvaluator;
pub use cache::BoneTransformCache;
pub use clip::{AnimationClip, DEFAULT_TICKS_PER_SECOND, Key, KeyframeTrack};
pub use error::{AnimationError, Result};
pub use evaluator::HierarchyEvaluator;
pub use model::{AnimatedModel, PoseRequest, PoseSelection};
pub use options::{EvaluatorOptions, SkeletonLimits, Traversal};
#[cfg(feature = "serde")]
pub use rig::{RigDocument, RigError};
pub use sampler::{Interpolate, LocalTransform, sample_local_transform};
pub use skeleton::{Bone, HierarchyNode, NodeId, ROOT_NODE, Skeleton, SkeletonBuilder};
pub use skin::{VertexBoneData, VertexSkinning};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
