//! Keyframe tracks and animation clips

use glam::{Quat, Vec3};
use log::warn;
use std::collections::HashMap;

use crate::error::{AnimationError, Result};

/// Ticks per second used when the source does not specify a rate
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

/// A (time, value) sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key<T> {
    /// Time in ticks
    pub time: f32,
    pub value: T,
}

impl<T> Key<T> {
    pub const fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Scale, rotation and translation keys animating one node
///
/// Every sequence holds at least one key and key times strictly increase.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    node_name: String,
    scale_keys: Vec<Key<Vec3>>,
    rotation_keys: Vec<Key<Quat>>,
    translation_keys: Vec<Key<Vec3>>,
}

impl KeyframeTrack {
    /// Create a track, validating each key sequence
    pub fn new(
        node_name: impl Into<String>,
        scale_keys: Vec<Key<Vec3>>,
        rotation_keys: Vec<Key<Quat>>,
        translation_keys: Vec<Key<Vec3>>,
    ) -> Result<Self> {
        let node_name = node_name.into();
        validate_keys(&node_name, "scale", &scale_keys)?;
        validate_keys(&node_name, "rotation", &rotation_keys)?;
        validate_keys(&node_name, "translation", &translation_keys)?;

        Ok(Self {
            node_name,
            scale_keys,
            rotation_keys,
            translation_keys,
        })
    }

    /// A track holding a single pose
    pub fn constant(
        node_name: impl Into<String>,
        scale: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Self {
        Self {
            node_name: node_name.into(),
            scale_keys: vec![Key::new(0.0, scale)],
            rotation_keys: vec![Key::new(0.0, rotation)],
            translation_keys: vec![Key::new(0.0, translation)],
        }
    }

    /// Name of the animated node
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn scale_keys(&self) -> &[Key<Vec3>] {
        &self.scale_keys
    }

    pub fn rotation_keys(&self) -> &[Key<Quat>] {
        &self.rotation_keys
    }

    pub fn translation_keys(&self) -> &[Key<Vec3>] {
        &self.translation_keys
    }
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate_keys<T>(node: &str, channel: &'static str, keys: &[Key<T>]) -> Result<()> {
    if keys.is_empty() {
        return Err(AnimationError::EmptyKeyframeTrack {
            node: node.to_string(),
            channel,
        });
    }

    // `!(a < b)` also rejects NaN times
    if keys.windows(2).any(|pair| !(pair[0].time < pair[1].time)) {
        return Err(AnimationError::UnorderedKeyframes {
            node: node.to_string(),
            channel,
        });
    }

    Ok(())
}

/// A keyframed animation clip
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    name: Option<String>,
    ticks_per_second: f32,
    duration_ticks: f32,
    channels: HashMap<String, KeyframeTrack>,
}

impl AnimationClip {
    /// Create a clip without channels
    ///
    /// A `ticks_per_second` of zero (or any non-positive or non-finite
    /// value) falls back to [`DEFAULT_TICKS_PER_SECOND`]. A non-finite
    /// duration is stored as zero and the clip plays as a static pose.
    pub fn new(name: Option<String>, ticks_per_second: f32, duration_ticks: f32) -> Self {
        let ticks_per_second = if ticks_per_second.is_finite() && ticks_per_second > 0.0 {
            ticks_per_second
        } else {
            DEFAULT_TICKS_PER_SECOND
        };

        let duration_ticks = if duration_ticks.is_finite() {
            duration_ticks
        } else {
            warn!(
                "Clip {:?} has a non-finite duration ({} ticks), treating it as zero",
                name, duration_ticks
            );
            0.0
        };

        if duration_ticks.floor() <= 0.0 {
            warn!(
                "Clip {:?} has no integral duration ({} ticks), it will play as a static pose",
                name, duration_ticks
            );
        }

        Self {
            name,
            ticks_per_second,
            duration_ticks,
            channels: HashMap::new(),
        }
    }

    /// Add a channel, builder style
    pub fn with_channel(mut self, track: KeyframeTrack) -> Self {
        self.insert_channel(track);
        self
    }

    /// Add a channel, returning the track it replaces
    pub fn insert_channel(&mut self, track: KeyframeTrack) -> Option<KeyframeTrack> {
        self.channels.insert(track.node_name.clone(), track)
    }

    /// Track animating the given node, if any
    pub fn channel(&self, node_name: &str) -> Option<&KeyframeTrack> {
        self.channels.get(node_name)
    }

    pub fn has_channel(&self, node_name: &str) -> bool {
        self.channels.contains_key(node_name)
    }

    /// All channels in unspecified order
    pub fn channels(&self) -> impl Iterator<Item = &KeyframeTrack> {
        self.channels.values()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    pub fn duration_ticks(&self) -> f32 {
        self.duration_ticks
    }

    /// Loop length in ticks: the integral part of the duration
    pub fn loop_length_ticks(&self) -> f32 {
        self.duration_ticks.floor()
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.duration_ticks / self.ticks_per_second
    }

    /// Convert a time in seconds into wrapped clip ticks
    ///
    /// The result lies in `[0, loop_length_ticks)`. Negative times wrap
    /// around as well. A clip without an integral loop length always
    /// samples tick 0.
    pub fn time_to_ticks(&self, time_seconds: f32) -> f32 {
        let ticks = time_seconds * self.ticks_per_second;
        let loop_length = self.loop_length_ticks();
        if loop_length <= 0.0 || !ticks.is_finite() {
            return 0.0;
        }

        let wrapped = ticks.rem_euclid(loop_length);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if wrapped >= loop_length { 0.0 } else { wrapped }
    }
}
