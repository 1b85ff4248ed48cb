//! # vx-tensor - tensor descriptions for accelerator graph runtimes
//!
//! This library provides the tensor metadata model used when building graphs
//! for a hardware accelerator: element types, storage roles, shapes,
//! quantization parameters, byte sizing and transient layout views, plus the
//! [`Tensor`](tensor::Tensor) capability trait and a host-memory
//! implementation of it.

// Public modules
pub mod builder;
pub mod error;
pub mod format;
pub mod tensor;

// Re-export main types for convenience
pub use error::{Result, TensorError};

// Re-export commonly used items in prelude
pub mod prelude {
    pub use crate::builder::{SpecPatterns, TensorFactory};
    pub use crate::error::{Result, TensorError};
    pub use crate::format::constants::{DEFAULT_TRANSIENT_PERMUTATION, MAX_TENSOR_RANK};
    pub use crate::format::types::{DataType, QuantType, TensorAttribute};
    pub use crate::tensor::{
        HostTensor, Quantization, Tensor, TensorId, TensorRole, TensorShape, TensorSpec,
        TensorStorage,
    };
}
