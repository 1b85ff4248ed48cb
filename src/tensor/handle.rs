//! The capability surface every materialized tensor exposes
//!
//! Graph builders and the hardware compiler only talk to tensors through the
//! [`Tensor`] trait. Backing storage is owned by the implementation: host
//! memory for [`HostTensor`](crate::tensor::HostTensor), driver buffers for
//! device-backed implementations living outside this crate.

use crate::error::Result;
use crate::format::types::DataType;
use crate::tensor::{Quantization, TensorShape, TensorSpec};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Identifier of a tensor, unique within the factory that created it
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(u32);

impl TensorId {
    /// Wrap a raw id
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw id
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TensorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Abstract tensor contract
///
/// All byte counts are in bytes, never elements. Implementations own their
/// storage and make no thread-safety promise beyond what `&`/`&mut` give.
pub trait Tensor {
    /// Current shape
    fn shape(&self) -> &TensorShape;

    /// Replace the shape; implementations may reject shapes that do not fit
    /// already materialized storage
    fn set_shape(&mut self, shape: TensorShape) -> Result<()>;

    fn data_type(&self) -> DataType;

    fn quantization(&self) -> &Quantization;

    /// Full specification, reflecting any shape change
    fn spec(&self) -> &TensorSpec;

    fn id(&self) -> TensorId;

    /// Copy `size` bytes from `data` into the tensor
    ///
    /// A `size` of 0 copies [`mem_size`](Self::mem_size) bytes. Fails when
    /// `data` is shorter than the requested size, when the size exceeds the
    /// tensor's capacity, or when the tensor cannot accept writes.
    fn copy_data_to_tensor(&mut self, data: &[u8], size: usize) -> Result<()>;

    /// Copy the full contents (`mem_size()` bytes) into the front of `out`
    fn copy_data_from_tensor(&self, out: &mut [u8]) -> Result<()>;

    /// Graph-time tensor with no data bound yet
    fn is_placeholder(&self) -> bool;

    /// Tensor holding compile-time constant data
    fn is_const_tensor(&self) -> bool;

    /// Size in bytes according to the current spec
    fn mem_size(&self) -> Result<usize> {
        self.spec().mem_size()
    }
}
