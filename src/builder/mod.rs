//! Construction of materialized tensors from specs

pub mod tensor_builder;

pub use tensor_builder::*;
