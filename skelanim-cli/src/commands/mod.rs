//! Command implementations

pub mod info;
pub mod pose;

use anyhow::{Context, Result};
use skelanim::{AnimatedModel, EvaluatorOptions, RigDocument, SkeletonLimits};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a rig document from disk
pub fn load_document(path: &Path) -> Result<RigDocument> {
    let file =
        File::open(path).with_context(|| format!("Failed to open rig {}", path.display()))?;
    RigDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse rig {}", path.display()))
}

/// Read a rig document and build its model
pub fn load_model(path: &Path, options: EvaluatorOptions) -> Result<AnimatedModel> {
    load_document(path)?
        .into_model(SkeletonLimits::default(), options)
        .with_context(|| format!("Invalid rig {}", path.display()))
}
