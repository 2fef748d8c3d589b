//! Keyframe sampling for animation tracks

use glam::{Mat4, Quat, Vec3};

use crate::clip::{Key, KeyframeTrack};

/// Trait for key values that can be interpolated between two keys
pub trait Interpolate: Copy {
    /// Interpolate from `self` towards `other` by `factor` in `[0, 1]`
    ///
    /// A factor of exactly 0 or 1 yields the corresponding endpoint
    /// unmodified.
    fn interpolate(&self, other: &Self, factor: f32) -> Self;
}

impl Interpolate for Vec3 {
    fn interpolate(&self, other: &Self, factor: f32) -> Self {
        if factor <= 0.0 {
            *self
        } else if factor >= 1.0 {
            *other
        } else {
            *self + (*other - *self) * factor
        }
    }
}

impl Interpolate for Quat {
    fn interpolate(&self, other: &Self, factor: f32) -> Self {
        if factor <= 0.0 {
            *self
        } else if factor >= 1.0 {
            *other
        } else {
            // Re-normalize so drift does not accumulate
            self.slerp(*other, factor).normalize()
        }
    }
}

/// Scale, rotation and translation of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub scale: Vec3,
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
        }
    }
}

impl LocalTransform {
    /// Compose `Translation * Rotation * Scale`
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_scale(self.scale)
    }

    /// Blend two transforms component-wise
    pub fn blend(&self, other: &Self, factor: f32) -> Self {
        Self {
            scale: self.scale.interpolate(&other.scale, factor),
            rotation: self.rotation.interpolate(&other.rotation, factor),
            translation: self.translation.interpolate(&other.translation, factor),
        }
    }
}

impl From<LocalTransform> for Mat4 {
    fn from(value: LocalTransform) -> Self {
        value.to_matrix()
    }
}

/// Find the index of the earlier key in the bracketing pair
///
/// Returns the first `i` with `time < keys[i + 1].time`. Past the last
/// key the final pair is used. Expects at least two keys.
pub fn find_key_index<T>(keys: &[Key<T>], time: f32) -> usize {
    let last_pair = keys.len().saturating_sub(2);
    keys.windows(2)
        .position(|pair| time < pair[1].time)
        .unwrap_or(last_pair)
}

/// Sample one key sequence at the given time in ticks
///
/// # Panics
///
/// Panics if `keys` is empty. Sequences held by a [`KeyframeTrack`] are
/// never empty, so [`sample_local_transform`] is always safe to call.
pub fn sample_keys<T: Interpolate>(keys: &[Key<T>], time: f32) -> T {
    if keys.len() == 1 {
        return keys[0].value;
    }

    let index = find_key_index(keys, time);
    let current = &keys[index];
    let next = &keys[index + 1];

    if time <= current.time {
        return current.value;
    }

    let delta = next.time - current.time;
    let factor = ((time - current.time) / delta).clamp(0.0, 1.0);
    current.value.interpolate(&next.value, factor)
}

/// Sample a track's local transform at the given time in ticks
pub fn sample_local_transform(track: &KeyframeTrack, time_ticks: f32) -> LocalTransform {
    LocalTransform {
        scale: sample_keys(track.scale_keys(), time_ticks),
        rotation: sample_keys(track.rotation_keys(), time_ticks),
        translation: sample_keys(track.translation_keys(), time_ticks),
    }
}
