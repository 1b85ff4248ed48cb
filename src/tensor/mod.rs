//! Tensor descriptions, quantization and the tensor capability contract
//!
//! [`TensorSpec`] and [`Quantization`] are plain values describing a tensor;
//! [`Tensor`] is the surface through which a materialized tensor is used, with
//! [`HostTensor`] as the host-memory implementation.

pub mod data;
pub mod handle;
pub mod host;
pub mod quantization;
pub mod shape;
pub mod spec;

pub use data::*;
pub use handle::*;
pub use host::*;
pub use quantization::*;
pub use shape::*;
pub use spec::*;
