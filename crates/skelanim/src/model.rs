//! Animated model: a skeleton plus the clips that animate it

use log::debug;
use std::sync::Arc;

use crate::blend::BlendEvaluator;
use crate::cache::BoneTransformCache;
use crate::clip::AnimationClip;
use crate::error::{AnimationError, Result};
use crate::evaluator::HierarchyEvaluator;
use crate::options::EvaluatorOptions;
use crate::skeleton::Skeleton;

/// Query surface for one loaded model
///
/// Skeleton and clips are shared and read-only, so several instances of
/// the same model can be evaluated concurrently, each with its own
/// [`BoneTransformCache`].
#[derive(Debug, Clone)]
pub struct AnimatedModel {
    skeleton: Arc<Skeleton>,
    clips: Vec<Arc<AnimationClip>>,
    options: EvaluatorOptions,
}

impl AnimatedModel {
    /// Create a model with default evaluator options
    pub fn new(skeleton: Arc<Skeleton>, clips: Vec<Arc<AnimationClip>>) -> Self {
        Self::with_options(skeleton, clips, EvaluatorOptions::default())
    }

    pub fn with_options(
        skeleton: Arc<Skeleton>,
        clips: Vec<Arc<AnimationClip>>,
        options: EvaluatorOptions,
    ) -> Self {
        debug!(
            "Created animated model with {} bones and {} clip(s)",
            skeleton.bone_count(),
            clips.len()
        );
        Self {
            skeleton,
            clips,
            options,
        }
    }

    pub fn skeleton(&self) -> &Arc<Skeleton> {
        &self.skeleton
    }

    pub fn options(&self) -> EvaluatorOptions {
        self.options
    }

    /// Get number of bones
    pub fn num_bones(&self) -> usize {
        self.skeleton.bone_count()
    }

    /// Get number of animation clips
    pub fn num_animations(&self) -> usize {
        self.clips.len()
    }

    /// Whether the model has at least one clip
    pub fn is_animated(&self) -> bool {
        !self.clips.is_empty()
    }

    /// Get a clip by index
    pub fn clip(&self, index: usize) -> Option<&Arc<AnimationClip>> {
        self.clips.get(index)
    }

    pub fn clips(&self) -> &[Arc<AnimationClip>] {
        &self.clips
    }

    fn checked_clip(&self, index: usize) -> Result<&AnimationClip> {
        self.clips
            .get(index)
            .map(Arc::as_ref)
            .ok_or(AnimationError::InvalidAnimationIndex {
                index,
                count: self.clips.len(),
            })
    }

    /// Write the pose of clip `animation_index` at `time_seconds`
    pub fn bone_transforms(
        &self,
        time_seconds: f32,
        animation_index: usize,
        cache: &mut BoneTransformCache,
    ) -> Result<()> {
        let clip = self.checked_clip(animation_index)?;
        HierarchyEvaluator::new(self.options).evaluate(&self.skeleton, clip, time_seconds, cache)
    }

    /// Write a blend of two clips, each sampled at its own time
    pub fn bone_transforms_blended(
        &self,
        start_time_seconds: f32,
        end_time_seconds: f32,
        start_index: usize,
        end_index: usize,
        blend_factor: f32,
        cache: &mut BoneTransformCache,
    ) -> Result<()> {
        let start_clip = self.checked_clip(start_index)?;
        let end_clip = self.checked_clip(end_index)?;
        BlendEvaluator::new(self.options).evaluate(
            &self.skeleton,
            start_clip,
            end_clip,
            start_time_seconds,
            end_time_seconds,
            blend_factor,
            cache,
        )
    }

    /// Write a blend of two clips sampled at the same time
    pub fn bone_transforms_blended_at(
        &self,
        time_seconds: f32,
        start_index: usize,
        end_index: usize,
        blend_factor: f32,
        cache: &mut BoneTransformCache,
    ) -> Result<()> {
        self.bone_transforms_blended(
            time_seconds,
            time_seconds,
            start_index,
            end_index,
            blend_factor,
            cache,
        )
    }
}

/// Which pose a [`PoseRequest`] asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseSelection {
    /// One clip at one time
    Single { animation_index: usize, time_seconds: f32 },
    /// Two clips mixed by `blend_factor`
    Blended {
        start_index: usize,
        end_index: usize,
        start_time_seconds: f32,
        end_time_seconds: f32,
        blend_factor: f32,
    },
}

/// A pending evaluation of one model instance into its own cache
#[derive(Debug)]
pub struct PoseRequest<'a> {
    pub model: &'a AnimatedModel,
    pub selection: PoseSelection,
    pub cache: &'a mut BoneTransformCache,
}

impl<'a> PoseRequest<'a> {
    pub fn new(
        model: &'a AnimatedModel,
        selection: PoseSelection,
        cache: &'a mut BoneTransformCache,
    ) -> Self {
        Self {
            model,
            selection,
            cache,
        }
    }

    /// Evaluate the selected pose into the request's cache
    pub fn evaluate(&mut self) -> Result<()> {
        match self.selection {
            PoseSelection::Single {
                animation_index,
                time_seconds,
            } => self
                .model
                .bone_transforms(time_seconds, animation_index, self.cache),
            PoseSelection::Blended {
                start_index,
                end_index,
                start_time_seconds,
                end_time_seconds,
                blend_factor,
            } => self.model.bone_transforms_blended(
                start_time_seconds,
                end_time_seconds,
                start_index,
                end_index,
                blend_factor,
                self.cache,
            ),
        }
    }
}
