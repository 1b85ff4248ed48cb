//! Scalar type, storage role and quantization scheme tags
//!
//! The numeric values are part of the runtime's stable contract with the
//! hardware compiler and must not be renumbered.

use crate::error::{Result, TensorError};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Element type of a tensor
#[repr(u32)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Not yet assigned
    #[default]
    Unknown = 0,
    /// 8-bit signed integer
    Int8 = 1,
    /// 8-bit unsigned integer
    Uint8 = 2,
    /// 16-bit signed integer
    Int16 = 3,
    /// 16-bit unsigned integer
    Uint16 = 4,
    /// 32-bit signed integer
    Int32 = 5,
    /// 32-bit unsigned integer
    Uint32 = 6,
    /// IEEE 754 half precision
    Float16 = 7,
    /// IEEE 754 single precision
    Float32 = 8,
    /// Boolean stored in a byte (no defined width for sizing)
    Bool8 = 9,
}

/// Storage role of a tensor inside a graph
#[repr(u32)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TensorAttribute {
    /// Fixed data known at graph compile time
    Constant = 1 << 0,
    /// Intermediate result owned by the graph
    #[default]
    Transient = 1 << 1,
    /// Graph-owned state persisted between runs
    Variable = 1 << 2,
    /// Graph input
    Input = 1 << 3,
    /// Graph output
    Output = 1 << 4,
}

/// Quantization scheme
#[repr(u32)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuantType {
    /// Not quantized
    #[default]
    None = 0,
    /// Per-tensor affine quantization with a zero point
    Asymmetric = 1,
    /// Per-channel symmetric quantization along `channel_dim`
    SymmetricPerChannel = 2,
    /// Per-tensor power-of-two scale
    DynamicFixedPoint = 3,
}

impl DataType {
    /// Convert from u32 to DataType
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(DataType::Unknown),
            1 => Ok(DataType::Int8),
            2 => Ok(DataType::Uint8),
            3 => Ok(DataType::Int16),
            4 => Ok(DataType::Uint16),
            5 => Ok(DataType::Int32),
            6 => Ok(DataType::Uint32),
            7 => Ok(DataType::Float16),
            8 => Ok(DataType::Float32),
            9 => Ok(DataType::Bool8),
            _ => Err(TensorError::UnknownDataType(value)),
        }
    }

    /// Size in bytes of one element, `None` for types without a defined width
    pub fn size_in_bytes(self) -> Option<usize> {
        match self {
            DataType::Int8 | DataType::Uint8 => Some(1),
            DataType::Int16 | DataType::Uint16 | DataType::Float16 => Some(2),
            DataType::Int32 | DataType::Uint32 | DataType::Float32 => Some(4),
            DataType::Unknown | DataType::Bool8 => None,
        }
    }

    /// Size in bytes of one element, failing for unsupported types
    pub fn byte_width(self) -> Result<usize> {
        self.size_in_bytes().ok_or(TensorError::UnsupportedDataType(self))
    }

    /// Check if this type is floating point
    pub fn is_float(self) -> bool {
        matches!(self, DataType::Float16 | DataType::Float32)
    }

    /// Check if this type is signed
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Float16
                | DataType::Float32
        )
    }

    /// Inclusive value range of integer types, used to clamp quantized values
    pub fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            DataType::Int8 => Some((i8::MIN as i64, i8::MAX as i64)),
            DataType::Uint8 => Some((0, u8::MAX as i64)),
            DataType::Int16 => Some((i16::MIN as i64, i16::MAX as i64)),
            DataType::Uint16 => Some((0, u16::MAX as i64)),
            DataType::Int32 => Some((i32::MIN as i64, i32::MAX as i64)),
            DataType::Uint32 => Some((0, u32::MAX as i64)),
            _ => None,
        }
    }

    /// Get a human-readable name for the type
    pub fn name(self) -> &'static str {
        match self {
            DataType::Unknown => "UNKNOWN",
            DataType::Int8 => "INT8",
            DataType::Uint8 => "UINT8",
            DataType::Int16 => "INT16",
            DataType::Uint16 => "UINT16",
            DataType::Int32 => "INT32",
            DataType::Uint32 => "UINT32",
            DataType::Float16 => "FLOAT16",
            DataType::Float32 => "FLOAT32",
            DataType::Bool8 => "BOOL8",
        }
    }
}

impl TensorAttribute {
    /// Convert from u32 to TensorAttribute
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            1 => Ok(TensorAttribute::Constant),
            2 => Ok(TensorAttribute::Transient),
            4 => Ok(TensorAttribute::Variable),
            8 => Ok(TensorAttribute::Input),
            16 => Ok(TensorAttribute::Output),
            _ => Err(TensorError::UnknownAttribute(value)),
        }
    }

    /// Whether tensors with this role are visible at the graph boundary
    pub fn is_graph_io(self) -> bool {
        matches!(self, TensorAttribute::Input | TensorAttribute::Output)
    }

    /// Get a human-readable name for the attribute
    pub fn name(self) -> &'static str {
        match self {
            TensorAttribute::Constant => "CONSTANT",
            TensorAttribute::Transient => "TRANSIENT",
            TensorAttribute::Variable => "VARIABLE",
            TensorAttribute::Input => "INPUT",
            TensorAttribute::Output => "OUTPUT",
        }
    }
}

impl QuantType {
    /// Convert from u32 to QuantType
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            0 => Ok(QuantType::None),
            1 => Ok(QuantType::Asymmetric),
            2 => Ok(QuantType::SymmetricPerChannel),
            3 => Ok(QuantType::DynamicFixedPoint),
            _ => Err(TensorError::UnknownQuantType(value)),
        }
    }

    /// Check if parameters are stored per channel
    pub fn is_per_channel(self) -> bool {
        matches!(self, QuantType::SymmetricPerChannel)
    }

    /// Check if parameters are stored once for the whole tensor
    pub fn is_per_tensor(self) -> bool {
        matches!(self, QuantType::Asymmetric | QuantType::DynamicFixedPoint)
    }

    /// Get a human-readable name for the scheme
    pub fn name(self) -> &'static str {
        match self {
            QuantType::None => "NONE",
            QuantType::Asymmetric => "ASYMMETRIC",
            QuantType::SymmetricPerChannel => "SYMMETRIC_PER_CHANNEL",
            QuantType::DynamicFixedPoint => "DYNAMIC_FIXED_POINT",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for TensorAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for QuantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
