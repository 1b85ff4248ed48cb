//! Error types for the tensor description layer

use thiserror::Error;

use crate::format::types::DataType;
use crate::tensor::TensorId;

/// Result type alias for tensor operations
pub type Result<T> = core::result::Result<T, TensorError>;

/// Error types that can occur when describing, sizing or accessing tensors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// The datatype has no defined byte width
    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(DataType),

    /// Unknown numeric tag for a data type
    #[error("Unknown data type tag: {0}")]
    UnknownDataType(u32),

    /// Unknown numeric tag for a tensor attribute
    #[error("Unknown tensor attribute tag: {0}")]
    UnknownAttribute(u32),

    /// Unknown numeric tag for a quantization scheme
    #[error("Unknown quantization type tag: {0}")]
    UnknownQuantType(u32),

    /// Byte size does not fit in the platform's address space
    #[error("Tensor byte size overflows usize")]
    SizeOverflow,

    /// Shape has more dimensions than the hardware compiler accepts
    #[error("Rank {rank} exceeds the supported maximum of {max}")]
    RankTooLarge { rank: usize, max: usize },

    /// Permutation has more entries than the shape has dimensions
    #[error("Permutation of length {len} cannot be applied to a rank {rank} shape")]
    InvalidPermutation { len: usize, rank: usize },

    /// Permutation refers to a dimension that does not exist
    #[error("Permutation index {index} out of bounds for rank {rank}")]
    PermutationOutOfBounds { index: u32, rank: usize },

    /// Scales and zero points disagree with the quantization scheme
    #[error("Quantization mismatch: {0}")]
    QuantizationMismatch(String),

    /// Per-channel axis does not exist in the tensor shape
    #[error("Channel dimension {channel_dim} invalid for rank {rank}")]
    InvalidChannelDim { channel_dim: i32, rank: usize },

    /// Channel index outside the per-channel parameter list
    #[error("Channel {channel} out of range ({channels} channels)")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Caller buffer shorter than the requested copy
    #[error("Buffer too small: required {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Requested copy exceeds the tensor's capacity
    #[error("Copy of {size} bytes exceeds tensor capacity of {capacity} bytes")]
    BufferTooLarge { size: usize, capacity: usize },

    /// Tensor has no backing data yet
    #[error("Tensor {0} has no materialized data")]
    NotMaterialized(TensorId),

    /// Constant tensor no longer accepts writes
    #[error("Constant tensor {0} is finalized")]
    ConstantFinalized(TensorId),

    /// Byte sizes disagree
    #[error("Shape mismatch: expected {expected} bytes, got {actual} bytes")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Factory has handed out every representable id
    #[error("Tensor id space exhausted")]
    IdsExhausted,

    /// Requested tensor role conflicts with the spec
    #[error("Invalid tensor role: {0}")]
    InvalidRole(String),
}
