//! Per-frame output buffer of final bone matrices

use glam::Mat4;
use std::ops::Index;

/// Final bone matrices indexed by bone index
///
/// Owned by the caller, one per model instance. Every evaluation
/// overwrites the entries of all bones it reaches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoneTransformCache {
    transforms: Vec<Mat4>,
}

impl BoneTransformCache {
    /// Create a cache of `bone_count` identity matrices
    pub fn new(bone_count: usize) -> Self {
        Self {
            transforms: vec![Mat4::IDENTITY; bone_count],
        }
    }

    /// Resize to `bone_count` entries, filling new slots with identity
    pub fn resize(&mut self, bone_count: usize) {
        self.transforms.resize(bone_count, Mat4::IDENTITY);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get transform for a specific bone
    pub fn get(&self, bone_index: usize) -> Option<&Mat4> {
        self.transforms.get(bone_index)
    }

    /// All matrices in bone index order
    pub fn as_slice(&self) -> &[Mat4] {
        &self.transforms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mat4> {
        self.transforms.iter()
    }

    pub(crate) fn set(&mut self, bone_index: usize, transform: Mat4) {
        self.transforms[bone_index] = transform;
    }

    /// Get all bone matrices as flat array for GPU upload
    ///
    /// 16 floats per bone, column-major, in bone index order.
    pub fn to_gpu_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.transforms.len() * 16);
        for transform in &self.transforms {
            data.extend_from_slice(&transform.to_cols_array());
        }
        data
    }
}

impl Index<usize> for BoneTransformCache {
    type Output = Mat4;

    fn index(&self, bone_index: usize) -> &Self::Output {
        &self.transforms[bone_index]
    }
}

impl<'a> IntoIterator for &'a BoneTransformCache {
    type Item = &'a Mat4;
    type IntoIter = std::slice::Iter<'a, Mat4>;

    fn into_iter(self) -> Self::IntoIter {
        self.transforms.iter()
    }
}
