//! Pose evaluation benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{Mat4, Quat, Vec3};
use skelanim::{
    AnimationClip, BlendEvaluator, BoneTransformCache, EvaluatorOptions, HierarchyEvaluator, Key,
    KeyframeTrack, Skeleton, SkeletonBuilder,
};
use std::hint::black_box;

/// A root with `chains` limbs of `depth` bones each, plus an unanimated
/// helper node per limb
fn build_rig(chains: usize, depth: usize) -> (Skeleton, AnimationClip, AnimationClip) {
    let mut builder = SkeletonBuilder::new();
    let root = builder.add_root("Root", Mat4::IDENTITY).unwrap();
    let mut walk = AnimationClip::new(Some("Walk".to_string()), 30.0, 60.0);
    let mut run = AnimationClip::new(Some("Run".to_string()), 30.0, 40.0);

    for chain in 0..chains {
        let mut parent = root;
        builder
            .add_child(root, format!("helper_{chain}"), Mat4::IDENTITY)
            .unwrap();
        for link in 0..depth {
            let name = format!("bone_{chain}_{link}");
            parent = builder
                .add_child(parent, name.clone(), Mat4::from_translation(Vec3::Y))
                .unwrap();
            builder.register_bone(&name, Mat4::IDENTITY).unwrap();

            let keys: Vec<Key<Quat>> = (0..8)
                .map(|i| Key::new(i as f32 * 8.0, Quat::from_rotation_z(i as f32 * 0.1)))
                .collect();
            let track = |keys: Vec<Key<Quat>>| {
                KeyframeTrack::new(
                    name.clone(),
                    vec![Key::new(0.0, Vec3::ONE)],
                    keys,
                    vec![Key::new(0.0, Vec3::ZERO), Key::new(56.0, Vec3::X)],
                )
                .unwrap()
            };
            walk.insert_channel(track(keys.clone()));
            run.insert_channel(track(keys));
        }
    }

    (builder.build().unwrap(), walk, run)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (chains, depth) in [(4, 4), (8, 8), (16, 12)] {
        let (skeleton, walk, _) = build_rig(chains, depth);
        let bones = skeleton.bone_count();
        let mut cache = BoneTransformCache::new(bones);

        group.bench_with_input(BenchmarkId::new("pruned", bones), &skeleton, |b, skeleton| {
            let evaluator = HierarchyEvaluator::default();
            b.iter(|| {
                evaluator
                    .evaluate(skeleton, &walk, black_box(0.7), &mut cache)
                    .unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("full", bones), &skeleton, |b, skeleton| {
            let evaluator = HierarchyEvaluator::new(EvaluatorOptions::full_traversal());
            b.iter(|| {
                evaluator
                    .evaluate(skeleton, &walk, black_box(0.7), &mut cache)
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    for (chains, depth) in [(4, 4), (16, 12)] {
        let (skeleton, walk, run) = build_rig(chains, depth);
        let bones = skeleton.bone_count();
        let mut cache = BoneTransformCache::new(bones);
        let evaluator = BlendEvaluator::default();

        group.bench_function(BenchmarkId::from_parameter(bones), |b| {
            b.iter(|| {
                evaluator
                    .evaluate(
                        &skeleton,
                        &walk,
                        &run,
                        black_box(0.7),
                        black_box(0.4),
                        black_box(0.3),
                        &mut cache,
                    )
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_blend);
criterion_main!(benches);
