//! Tensor specification: type, shape, storage role and quantization

use crate::error::{Result, TensorError};
use crate::format::constants::DEFAULT_TRANSIENT_PERMUTATION;
use crate::format::types::{DataType, TensorAttribute};
use crate::tensor::{Quantization, TensorShape};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Complete description of a tensor before it is materialized
///
/// A default-constructed spec has an `Unknown` datatype and an empty shape;
/// its fields must be assigned before [`mem_size`](Self::mem_size) can succeed.
/// Cloning performs a deep copy of every field.
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TensorSpec {
    /// Element type
    pub datatype: DataType,
    /// Dimensions, innermost first
    pub shape: TensorShape,
    /// Storage role inside the graph
    pub attr: TensorAttribute,
    /// Quantization parameters (`QuantType::None` when unquantized)
    pub quantization: Quantization,
}

impl TensorSpec {
    /// Create an unquantized spec
    pub fn new(datatype: DataType, shape: impl Into<TensorShape>, attr: TensorAttribute) -> Self {
        Self { datatype, shape: shape.into(), attr, quantization: Quantization::none() }
    }

    /// Create a spec carrying quantization parameters
    pub fn with_quantization(
        datatype: DataType,
        shape: impl Into<TensorShape>,
        attr: TensorAttribute,
        quantization: Quantization,
    ) -> Self {
        Self { datatype, shape: shape.into(), attr, quantization }
    }

    /// Set the element type
    pub fn set_data_type(&mut self, datatype: DataType) -> &mut Self {
        self.datatype = datatype;
        self
    }

    /// Set the shape
    pub fn set_shape(&mut self, shape: impl Into<TensorShape>) -> &mut Self {
        self.shape = shape.into();
        self
    }

    /// Set the storage role
    pub fn set_attribute(&mut self, attr: TensorAttribute) -> &mut Self {
        self.attr = attr;
        self
    }

    /// Replace the quantization parameters
    pub fn set_quantization(&mut self, quantization: Quantization) -> &mut Self {
        self.quantization = quantization;
        self
    }

    /// Number of elements; 1 for a scalar
    pub fn element_count(&self) -> Result<usize> {
        self.shape.element_count().ok_or(TensorError::SizeOverflow)
    }

    /// Total size in bytes: product of the dimensions times the element width
    ///
    /// A scalar (empty shape) occupies one element. Datatypes without a defined
    /// width fail with [`TensorError::UnsupportedDataType`].
    pub fn mem_size(&self) -> Result<usize> {
        let width = self.datatype.byte_width()?;
        self.element_count()?.checked_mul(width).ok_or(TensorError::SizeOverflow)
    }

    /// Derive a transient spec whose `i`-th dimension is `shape[perm[i]]`
    ///
    /// Datatype and quantization are carried over unchanged; `self` is not
    /// modified. Indices refer to the dimensions of this spec's shape.
    pub fn as_transient_spec(&self, perm: &[u32]) -> Result<TensorSpec> {
        let shape = self.shape.permute(perm)?;
        Ok(TensorSpec::with_quantization(
            self.datatype,
            shape,
            TensorAttribute::Transient,
            self.quantization.clone(),
        ))
    }

    /// [`as_transient_spec`](Self::as_transient_spec) with the identity
    /// permutation of a rank-4 tensor
    ///
    /// Specs of rank below 4 fail with [`TensorError::InvalidPermutation`].
    pub fn as_transient_spec_default(&self) -> Result<TensorSpec> {
        self.as_transient_spec(&DEFAULT_TRANSIENT_PERMUTATION)
    }

    /// Check if the spec carries quantization parameters
    pub fn is_quantized(&self) -> bool {
        self.quantization.is_quantized()
    }

    /// Validate that the spec can be materialized
    pub fn validate(&self) -> Result<()> {
        self.shape.validate_rank()?;
        self.mem_size()?;
        self.quantization.validate_for_shape(&self.shape)
    }
}

impl std::fmt::Display for TensorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.attr, self.datatype, self.shape)?;
        if self.is_quantized() {
            write!(f, " ({})", self.quantization.quant_type())?;
        }
        Ok(())
    }
}
