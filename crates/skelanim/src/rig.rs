//! JSON document form of an imported rig
//!
//! A rig document carries what an importer hands to the animation core:
//! the node hierarchy, the bone table and the clips. Matrices are 16
//! column-major floats, vectors `[x, y, z]` and quaternions
//! `[x, y, z, w]`.
//!
//! ```json
//! {
//!   "nodes": [
//!     { "name": "Root" },
//!     { "name": "Child", "parent": "Root" }
//!   ],
//!   "bones": [{ "name": "Root" }, { "name": "Child" }],
//!   "clips": [{
//!     "name": "Turn",
//!     "ticks_per_second": 24.0,
//!     "duration_ticks": 24.0,
//!     "channels": [{
//!       "node": "Root",
//!       "scale": [{ "time": 0.0, "value": [1.0, 1.0, 1.0] }],
//!       "rotation": [{ "time": 0.0, "value": [0.0, 0.0, 0.0, 1.0] }],
//!       "translation": [{ "time": 0.0, "value": [0.0, 0.0, 0.0] }]
//!     }]
//!   }]
//! }
//! ```

use glam::{Mat4, Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::clip::{AnimationClip, Key, KeyframeTrack};
use crate::error::AnimationError;
use crate::model::AnimatedModel;
use crate::options::{EvaluatorOptions, SkeletonLimits};
use crate::skeleton::{Skeleton, SkeletonBuilder};

/// Errors raised while reading a rig document
#[derive(Error, Debug)]
pub enum RigError {
    #[error("Malformed rig document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// A hierarchy node. Parents must appear before their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default = "identity")]
    pub bind: Mat4,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneDocument {
    pub name: String,
    #[serde(default = "identity")]
    pub offset: Mat4,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDocument {
    pub node: String,
    pub scale: Vec<Key<Vec3>>,
    pub rotation: Vec<Key<Quat>>,
    pub translation: Vec<Key<Vec3>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 0 selects the default rate
    #[serde(default)]
    pub ticks_per_second: f32,
    pub duration_ticks: f32,
    #[serde(default)]
    pub channels: Vec<ChannelDocument>,
}

/// Node hierarchy, bone table and clips of one model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RigDocument {
    pub nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub bones: Vec<BoneDocument>,
    #[serde(default)]
    pub clips: Vec<ClipDocument>,
}

impl FromStr for RigDocument {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl RigDocument {
    /// Parse a document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, RigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the skeleton described by the document
    pub fn build_skeleton(&self, limits: SkeletonLimits) -> Result<Skeleton, AnimationError> {
        let mut builder = SkeletonBuilder::with_limits(limits);

        for node in &self.nodes {
            match &node.parent {
                None => {
                    builder.add_root(node.name.clone(), node.bind)?;
                }
                Some(parent) => {
                    let parent_id = builder.find_node(parent).ok_or_else(|| {
                        AnimationError::UnknownParentNode {
                            node: node.name.clone(),
                            parent: parent.clone(),
                        }
                    })?;
                    builder.add_child(parent_id, node.name.clone(), node.bind)?;
                }
            }
        }

        for bone in &self.bones {
            builder.register_bone(&bone.name, bone.offset)?;
        }

        builder.build()
    }

    /// Build the clips described by the document
    pub fn build_clips(&self) -> Result<Vec<AnimationClip>, AnimationError> {
        self.clips
            .iter()
            .map(|doc| {
                let mut clip =
                    AnimationClip::new(doc.name.clone(), doc.ticks_per_second, doc.duration_ticks);
                for channel in &doc.channels {
                    clip.insert_channel(KeyframeTrack::new(
                        channel.node.clone(),
                        channel.scale.clone(),
                        channel.rotation.clone(),
                        channel.translation.clone(),
                    )?);
                }
                Ok(clip)
            })
            .collect()
    }

    /// Validate the document and turn it into an animated model
    pub fn into_model(
        self,
        limits: SkeletonLimits,
        options: EvaluatorOptions,
    ) -> Result<AnimatedModel, AnimationError> {
        let skeleton = self.build_skeleton(limits)?;
        let clips = self.build_clips()?;
        debug!(
            "Loaded rig with {} nodes, {} bones, {} clip(s)",
            self.nodes.len(),
            self.bones.len(),
            clips.len()
        );

        Ok(AnimatedModel::with_options(
            Arc::new(skeleton),
            clips.into_iter().map(Arc::new).collect(),
            options,
        ))
    }
}
