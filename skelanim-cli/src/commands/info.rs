//! `info` command

use anyhow::Result;
use skelanim::{EvaluatorOptions, NodeId, ROOT_NODE, Skeleton};
use std::path::Path;

use super::load_model;

pub fn execute(path: &Path, detailed: bool) -> Result<()> {
    let model = load_model(path, EvaluatorOptions::default())?;
    let skeleton = model.skeleton();

    println!("=== Rig Information ===");
    println!("File: {}", path.display());
    println!("Bones: {}", skeleton.bone_count());
    println!(
        "Nodes: {} ({} required)",
        skeleton.node_count(),
        skeleton.required_node_count()
    );
    println!("Animations: {}", model.num_animations());

    for (index, clip) in model.clips().iter().enumerate() {
        println!(
            "  [{}] {}: {} ticks @ {} ticks/s ({:.3}s, {} channels)",
            index,
            clip.name().unwrap_or("<unnamed>"),
            clip.duration_ticks(),
            clip.ticks_per_second(),
            clip.duration_seconds(),
            clip.channel_count()
        );
    }

    if detailed {
        println!("\n=== Hierarchy ===");
        print_node(skeleton, ROOT_NODE, 0);
    }

    Ok(())
}

fn print_node(skeleton: &Skeleton, id: NodeId, depth: usize) {
    let Some(node) = skeleton.node(id) else {
        return;
    };

    let mut line = format!("{}{}", "  ".repeat(depth), node.name);
    if let Some(bone) = skeleton.bone_for_node(id) {
        line.push_str(&format!(" [bone {}]", bone.index));
    }
    if !node.is_required() {
        line.push_str(" (pruned)");
    }
    println!("{line}");

    for &child in &node.children {
        print_node(skeleton, child, depth + 1);
    }
}
