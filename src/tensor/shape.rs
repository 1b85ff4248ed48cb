//! Tensor shape and dimension handling
//!
//! Dimensions are stored innermost-first, the order the hardware compiler
//! consumes. An empty dimension list describes a scalar and a zero-sized
//! dimension describes an empty tensor; both are valid shapes.

use crate::error::{Result, TensorError};
use crate::format::constants::MAX_TENSOR_RANK;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Represents the shape of a tensor
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TensorShape {
    /// Dimensions of the tensor
    pub dimensions: Vec<u32>,
}

impl TensorShape {
    /// Create a new tensor shape from dimensions
    pub fn new(dimensions: Vec<u32>) -> Self {
        Self { dimensions }
    }

    /// Create a scalar shape (rank 0)
    pub fn scalar() -> Self {
        Self::new(Vec::new())
    }

    /// Get the number of dimensions
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// Get the dimensions as a slice
    pub fn dims(&self) -> &[u32] {
        &self.dimensions
    }

    /// Get the dimensions as a mutable slice
    pub fn dims_mut(&mut self) -> &mut [u32] {
        &mut self.dimensions
    }

    /// Get a specific dimension
    pub fn dim(&self, index: usize) -> Option<u32> {
        self.dimensions.get(index).copied()
    }

    /// Product of all dimensions; 1 for a scalar, `None` on overflow
    pub fn element_count(&self) -> Option<usize> {
        self.dimensions
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim as usize))
    }

    /// Check if this shape describes a scalar
    pub fn is_scalar(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Check if any dimension is zero
    pub fn is_empty_tensor(&self) -> bool {
        self.dimensions.contains(&0)
    }

    /// Element strides, innermost dimension first
    pub fn calculate_strides(&self) -> Vec<usize> {
        let mut strides = Vec::with_capacity(self.rank());
        let mut stride = 1usize;
        for &dim in &self.dimensions {
            strides.push(stride);
            stride = stride.saturating_mul(dim as usize);
        }
        strides
    }

    /// Build a shape whose `i`-th dimension is `self[perm[i]]`
    ///
    /// The permutation may be shorter than the rank (trailing dimensions are
    /// dropped) and may repeat indices. Every index must refer to a dimension of
    /// this shape.
    pub fn permute(&self, perm: &[u32]) -> Result<TensorShape> {
        if perm.len() > self.rank() {
            return Err(TensorError::InvalidPermutation { len: perm.len(), rank: self.rank() });
        }

        let dimensions = perm
            .iter()
            .map(|&axis| {
                self.dim(axis as usize)
                    .ok_or(TensorError::PermutationOutOfBounds { index: axis, rank: self.rank() })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TensorShape::new(dimensions))
    }

    /// Check the rank against what the hardware compiler accepts
    pub fn validate_rank(&self) -> Result<()> {
        if self.rank() > MAX_TENSOR_RANK {
            return Err(TensorError::RankTooLarge { rank: self.rank(), max: MAX_TENSOR_RANK });
        }
        Ok(())
    }

    /// Get a string representation of the shape
    pub fn shape_string(&self) -> String {
        format!(
            "[{}]",
            self.dimensions.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", ")
        )
    }
}

impl std::fmt::Display for TensorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.shape_string())
    }
}

impl From<Vec<u32>> for TensorShape {
    fn from(dimensions: Vec<u32>) -> Self {
        TensorShape::new(dimensions)
    }
}

impl From<&[u32]> for TensorShape {
    fn from(dimensions: &[u32]) -> Self {
        TensorShape::new(dimensions.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for TensorShape {
    fn from(dimensions: [u32; N]) -> Self {
        TensorShape::new(dimensions.to_vec())
    }
}

impl AsRef<[u32]> for TensorShape {
    fn as_ref(&self) -> &[u32] {
        &self.dimensions
    }
}

impl std::ops::Index<usize> for TensorShape {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.dimensions[index]
    }
}

impl std::ops::IndexMut<usize> for TensorShape {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.dimensions[index]
    }
}
