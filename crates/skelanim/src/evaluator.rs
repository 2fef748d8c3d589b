//! Hierarchy traversal and single-clip pose evaluation
//!
//! The traversal starts at the root with an identity accumulator. For
//! each visited node the local transform comes either from the active
//! clip(s) or from the node's bind transform; the global transform is
//! `parent * local`. Nodes that are bones write
//! `global_inverse * global * offset` into the cache.

use glam::Mat4;
use log::trace;

use crate::cache::BoneTransformCache;
use crate::clip::AnimationClip;
use crate::error::Result;
use crate::options::{EvaluatorOptions, Traversal};
use crate::sampler::sample_local_transform;
use crate::skeleton::{HierarchyNode, NodeId, ROOT_NODE, Skeleton};

/// Supplies animated local transforms during traversal
pub(crate) trait PoseSource {
    /// Local transform for `node`, or `None` to use its bind transform
    fn local_transform(&self, node: &HierarchyNode) -> Result<Option<Mat4>>;
}

/// Walk the hierarchy and write final bone matrices for `skeleton`
pub(crate) fn walk_hierarchy<S: PoseSource>(
    skeleton: &Skeleton,
    source: &S,
    options: EvaluatorOptions,
    cache: &mut BoneTransformCache,
) -> Result<()> {
    cache.resize(skeleton.bone_count());

    if should_visit(skeleton.root(), options) {
        visit_node(skeleton, source, options, ROOT_NODE, Mat4::IDENTITY, cache)?;
    }
    Ok(())
}

fn should_visit(node: &HierarchyNode, options: EvaluatorOptions) -> bool {
    match options.traversal {
        Traversal::Pruned => node.is_required(),
        Traversal::Full => true,
    }
}

fn visit_node<S: PoseSource>(
    skeleton: &Skeleton,
    source: &S,
    options: EvaluatorOptions,
    id: NodeId,
    parent_transform: Mat4,
    cache: &mut BoneTransformCache,
) -> Result<()> {
    let nodes = skeleton.nodes();
    let node = &nodes[id];

    let local_transform = source
        .local_transform(node)?
        .unwrap_or(node.local_bind_transform);
    let global_transform = parent_transform * local_transform;

    if let Some(bone) = skeleton.bone_for_node(id) {
        trace!("Node '{}' writes bone {}", node.name, bone.index);
        cache.set(
            bone.index,
            skeleton.global_inverse_transform() * global_transform * bone.offset_matrix,
        );
    }

    for &child in &node.children {
        if should_visit(&nodes[child], options) {
            visit_node(skeleton, source, options, child, global_transform, cache)?;
        }
    }

    Ok(())
}

/// Samples one clip at a fixed tick time
struct ClipPose<'a> {
    clip: &'a AnimationClip,
    time_ticks: f32,
}

impl PoseSource for ClipPose<'_> {
    fn local_transform(&self, node: &HierarchyNode) -> Result<Option<Mat4>> {
        Ok(self
            .clip
            .channel(&node.name)
            .map(|track| sample_local_transform(track, self.time_ticks).to_matrix()))
    }
}

/// Evaluates a single clip over a skeleton
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyEvaluator {
    options: EvaluatorOptions,
}

impl HierarchyEvaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EvaluatorOptions {
        self.options
    }

    /// Write the pose of `clip` at `time_seconds` into `cache`
    ///
    /// The time is converted to ticks and wrapped into the clip's loop
    /// window, so playback is periodic. The cache is resized to the
    /// skeleton's bone count. A single-clip evaluation never fails; the
    /// `Result` is shared with the blended path.
    pub fn evaluate(
        &self,
        skeleton: &Skeleton,
        clip: &AnimationClip,
        time_seconds: f32,
        cache: &mut BoneTransformCache,
    ) -> Result<()> {
        let source = ClipPose {
            clip,
            time_ticks: clip.time_to_ticks(time_seconds),
        };
        walk_hierarchy(skeleton, &source, self.options, cache)
    }
}
