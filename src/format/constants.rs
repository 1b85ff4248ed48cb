//! Layout constants shared by the tensor description layer

/// Permutation used by `TensorSpec::as_transient_spec_default`; assumes rank-4 tensors
pub const DEFAULT_TRANSIENT_PERMUTATION: [u32; 4] = [0, 1, 2, 3];

/// Highest rank the hardware compiler accepts
pub const MAX_TENSOR_RANK: usize = 8;

/// Number of bytes shown by `TensorStorage::hex_preview` in debug logs
pub const DEBUG_PREVIEW_BYTES: usize = 16;
