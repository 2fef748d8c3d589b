//! `sample`, `blend` and `sweep` commands

use anyhow::{Context, Result, bail};
use log::info;
use serde::Serialize;
use skelanim::parallel::evaluate_all;
use skelanim::{BoneTransformCache, EvaluatorOptions, PoseRequest, PoseSelection, Skeleton};
use std::path::Path;

use super::load_model;
use crate::cli::OutputFormat;

#[derive(Serialize)]
struct BoneOutput<'a> {
    index: usize,
    name: &'a str,
    /// Column-major
    matrix: [f32; 16],
}

#[derive(Serialize)]
struct PoseOutput<'a> {
    bones: Vec<BoneOutput<'a>>,
}

pub fn sample(
    path: &Path,
    clip: usize,
    time: f32,
    full: bool,
    format: OutputFormat,
) -> Result<()> {
    let options = if full {
        EvaluatorOptions::full_traversal()
    } else {
        EvaluatorOptions::default()
    };
    let model = load_model(path, options)?;

    let mut cache = BoneTransformCache::default();
    model
        .bone_transforms(time, clip, &mut cache)
        .with_context(|| format!("Failed to evaluate clip {clip} at {time}s"))?;

    info!("Sampled clip {} at {}s", clip, time);
    print_pose(model.skeleton(), &cache, format)
}

pub fn blend(
    path: &Path,
    from: usize,
    to: usize,
    factor: f32,
    time: f32,
    end_time: f32,
    format: OutputFormat,
) -> Result<()> {
    let model = load_model(path, EvaluatorOptions::default())?;

    let mut cache = BoneTransformCache::default();
    model
        .bone_transforms_blended(time, end_time, from, to, factor, &mut cache)
        .with_context(|| format!("Failed to blend clips {from} and {to} by {factor}"))?;

    info!(
        "Blended clip {} at {}s with clip {} at {}s",
        from, time, to, end_time
    );
    print_pose(model.skeleton(), &cache, format)
}

pub fn sweep(path: &Path, clip: usize, frames: usize) -> Result<()> {
    if frames == 0 {
        bail!("Frame count must be at least 1");
    }

    let model = load_model(path, EvaluatorOptions::default())?;
    let Some(selected) = model.clip(clip) else {
        bail!(
            "Clip {} does not exist, rig has {} animation(s)",
            clip,
            model.num_animations()
        );
    };

    let period = selected.loop_length_ticks() / selected.ticks_per_second();
    let times: Vec<f32> = (0..frames)
        .map(|frame| period * frame as f32 / frames as f32)
        .collect();
    let mut caches = vec![BoneTransformCache::default(); frames];

    let mut requests: Vec<PoseRequest<'_>> = caches
        .iter_mut()
        .zip(&times)
        .map(|(cache, &time_seconds)| {
            PoseRequest::new(
                &model,
                PoseSelection::Single {
                    animation_index: clip,
                    time_seconds,
                },
                cache,
            )
        })
        .collect();
    evaluate_all(&mut requests).context("Failed to evaluate frames")?;
    drop(requests);

    let skeleton = model.skeleton();
    for (frame, (time, cache)) in times.iter().zip(&caches).enumerate() {
        println!("Frame {frame} ({time:.4}s)");
        for bone in skeleton.bones() {
            let origin = cache[bone.index].w_axis;
            println!(
                "  [{}] {:<16} {:>10.5} {:>10.5} {:>10.5}",
                bone.index, bone.name, origin.x, origin.y, origin.z
            );
        }
    }

    Ok(())
}

fn print_pose(skeleton: &Skeleton, cache: &BoneTransformCache, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for bone in skeleton.bones() {
                let matrix = cache[bone.index];
                println!("Bone {} '{}':", bone.index, bone.name);
                for row in 0..4 {
                    let r = matrix.row(row);
                    println!("  {:>10.5} {:>10.5} {:>10.5} {:>10.5}", r.x, r.y, r.z, r.w);
                }
            }
        }
        OutputFormat::Json => {
            let output = PoseOutput {
                bones: skeleton
                    .bones()
                    .iter()
                    .map(|bone| BoneOutput {
                        index: bone.index,
                        name: &bone.name,
                        matrix: cache[bone.index].to_cols_array(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
