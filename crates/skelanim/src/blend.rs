//! Two-clip blended pose evaluation

use glam::Mat4;

use crate::cache::BoneTransformCache;
use crate::clip::AnimationClip;
use crate::error::{AnimationError, Result};
use crate::evaluator::{PoseSource, walk_hierarchy};
use crate::options::EvaluatorOptions;
use crate::sampler::sample_local_transform;
use crate::skeleton::{HierarchyNode, Skeleton};

/// Samples two clips and mixes their local transforms
struct BlendedPose<'a> {
    start_clip: &'a AnimationClip,
    end_clip: &'a AnimationClip,
    start_ticks: f32,
    end_ticks: f32,
    factor: f32,
}

impl PoseSource for BlendedPose<'_> {
    fn local_transform(&self, node: &HierarchyNode) -> Result<Option<Mat4>> {
        match (
            self.start_clip.channel(&node.name),
            self.end_clip.channel(&node.name),
        ) {
            (Some(start), Some(end)) => {
                let start = sample_local_transform(start, self.start_ticks);
                let end = sample_local_transform(end, self.end_ticks);
                Ok(Some(start.blend(&end, self.factor).to_matrix()))
            }
            (None, None) => Ok(None),
            // Unrequired nodes keep their bind transform
            _ if !node.is_required() => Ok(None),
            _ => Err(AnimationError::MismatchedBlendChannels {
                node: node.name.clone(),
            }),
        }
    }
}

/// Evaluates a blend of two clips over a skeleton
///
/// Both clips are expected to animate the same set of required nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendEvaluator {
    options: EvaluatorOptions,
}

impl BlendEvaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EvaluatorOptions {
        self.options
    }

    /// Write the blended pose into `cache`
    ///
    /// Each clip is sampled at its own time, wrapped into its own loop
    /// window. A factor of 0 reproduces the start clip, 1 the end clip.
    ///
    /// # Errors
    ///
    /// [`AnimationError::InvalidBlendFactor`] when `blend_factor` is not in
    /// `[0, 1]`, checked before anything is written.
    /// [`AnimationError::MismatchedBlendChannels`] when a required node is
    /// animated by only one of the clips; the cache is then partially
    /// written and must not be consumed. Unrequired nodes keep their bind
    /// transform in that case, so both traversal modes agree.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        &self,
        skeleton: &Skeleton,
        start_clip: &AnimationClip,
        end_clip: &AnimationClip,
        start_time_seconds: f32,
        end_time_seconds: f32,
        blend_factor: f32,
        cache: &mut BoneTransformCache,
    ) -> Result<()> {
        if !(0.0..=1.0).contains(&blend_factor) {
            return Err(AnimationError::InvalidBlendFactor(blend_factor));
        }

        let source = BlendedPose {
            start_clip,
            end_clip,
            start_ticks: start_clip.time_to_ticks(start_time_seconds),
            end_ticks: end_clip.time_to_ticks(end_time_seconds),
            factor: blend_factor,
        };
        walk_hierarchy(skeleton, &source, self.options, cache)
    }
}
