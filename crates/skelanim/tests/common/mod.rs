//! Shared fixtures for integration tests
#![allow(dead_code)]

use glam::{Mat4, Quat, Vec3};
use skelanim::{AnimationClip, Key, KeyframeTrack, Skeleton, SkeletonBuilder};
use std::f32::consts::FRAC_PI_2;

pub const EPSILON: f32 = 1e-5;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// "Root" with one child "Child", both bones, identity offsets
pub fn two_bone_skeleton() -> Skeleton {
    let mut builder = SkeletonBuilder::new();
    let root = builder.add_root("Root", Mat4::IDENTITY).unwrap();
    builder
        .add_child(root, "Child", Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)))
        .unwrap();
    builder.register_bone("Root", Mat4::IDENTITY).unwrap();
    builder.register_bone("Child", Mat4::IDENTITY).unwrap();
    builder.build().unwrap()
}

/// 24 ticks at 24 ticks/s rotating "Root" from 0 to 90 degrees about Y
pub fn turn_clip() -> AnimationClip {
    let track = KeyframeTrack::new(
        "Root",
        vec![Key::new(0.0, Vec3::ONE)],
        vec![
            Key::new(0.0, Quat::IDENTITY),
            Key::new(24.0, Quat::from_rotation_y(FRAC_PI_2)),
        ],
        vec![Key::new(0.0, Vec3::ZERO)],
    )
    .unwrap();
    AnimationClip::new(Some("Turn".to_string()), 24.0, 24.0).with_channel(track)
}

/// A clip holding `rotation` on `node` for its whole duration
pub fn static_clip(node: &str, rotation: Quat) -> AnimationClip {
    AnimationClip::new(None, 24.0, 24.0).with_channel(KeyframeTrack::constant(
        node,
        Vec3::ONE,
        rotation,
        Vec3::ZERO,
    ))
}

pub fn assert_mat4_near(actual: Mat4, expected: Mat4) {
    assert!(
        actual.abs_diff_eq(expected, EPSILON),
        "matrices differ:\n  actual   {actual:?}\n  expected {expected:?}"
    );
}
