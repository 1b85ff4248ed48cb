//! Quantization parameters and the affine arithmetic they describe
//!
//! A [`Quantization`] is a plain parameter bag: its setters overwrite fields
//! without checking that the scheme, scales and zero points agree. Consistency
//! is checked on demand with [`Quantization::validate`] and
//! [`Quantization::validate_for_shape`], normally when a tensor is created.

use crate::error::{Result, TensorError};
use crate::format::types::{DataType, QuantType};
use crate::tensor::TensorShape;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Scale/zero-point parameters of a quantized tensor
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quantization {
    quant_type: QuantType,
    channel_dim: i32,
    scales: Vec<f32>,
    zero_points: Vec<i32>,
}

impl Quantization {
    /// Unquantized parameters
    pub fn none() -> Self {
        Self::default()
    }

    /// Per-tensor parameters (one scale, one zero point)
    pub fn per_tensor(quant_type: QuantType, scale: f32, zero_point: i32) -> Self {
        Self { quant_type, channel_dim: 0, scales: vec![scale], zero_points: vec![zero_point] }
    }

    /// Per-channel parameters along `channel_dim`
    pub fn per_channel(
        quant_type: QuantType,
        channel_dim: i32,
        scales: Vec<f32>,
        zero_points: Vec<i32>,
    ) -> Self {
        Self { quant_type, channel_dim, scales, zero_points }
    }

    /// Dynamic fixed point with `fractional_length` bits after the binary point
    pub fn dynamic_fixed_point(fractional_length: i8) -> Self {
        let scale = 2.0f32.powi(-(fractional_length as i32));
        Self::per_tensor(QuantType::DynamicFixedPoint, scale, 0)
    }

    /// Get the quantization scheme
    pub fn quant_type(&self) -> QuantType {
        self.quant_type
    }

    /// Set the quantization scheme
    pub fn set_quant_type(&mut self, quant_type: QuantType) -> &mut Self {
        self.quant_type = quant_type;
        self
    }

    /// Per-channel axis; meaningless unless the scheme is per-channel
    pub fn channel_dim(&self) -> i32 {
        self.channel_dim
    }

    /// Set the per-channel axis
    pub fn set_channel_dim(&mut self, channel_dim: i32) -> &mut Self {
        self.channel_dim = channel_dim;
        self
    }

    /// Get the scales
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Mutable access to the scales
    pub fn scales_mut(&mut self) -> &mut Vec<f32> {
        &mut self.scales
    }

    /// Replace the scales
    pub fn set_scales(&mut self, scales: Vec<f32>) -> &mut Self {
        self.scales = scales;
        self
    }

    /// Get the zero points
    pub fn zero_points(&self) -> &[i32] {
        &self.zero_points
    }

    /// Mutable access to the zero points
    pub fn zero_points_mut(&mut self) -> &mut Vec<i32> {
        &mut self.zero_points
    }

    /// Replace the zero points
    pub fn set_zero_points(&mut self, zero_points: Vec<i32>) -> &mut Self {
        self.zero_points = zero_points;
        self
    }

    /// Check if any quantization scheme is set
    pub fn is_quantized(&self) -> bool {
        self.quant_type != QuantType::None
    }

    /// Number of parameter sets (1 for per-tensor schemes)
    pub fn channel_count(&self) -> usize {
        self.scales.len()
    }

    /// Check that scales and zero points agree with the scheme
    ///
    /// Scales must be finite for every scheme. `None` accepts any parameter
    /// count and skips the positivity check.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.scales.iter().find(|s| !s.is_finite()) {
            return Err(TensorError::QuantizationMismatch(format!(
                "scale {} is not a finite number",
                bad
            )));
        }

        if self.quant_type == QuantType::None {
            return Ok(());
        }

        if self.quant_type.is_per_tensor()
            && (self.scales.len() != 1 || self.zero_points.len() != 1)
        {
            return Err(TensorError::QuantizationMismatch(format!(
                "{} expects exactly one scale and one zero point, got {} and {}",
                self.quant_type,
                self.scales.len(),
                self.zero_points.len()
            )));
        }

        if self.quant_type.is_per_channel() {
            if self.scales.is_empty() {
                return Err(TensorError::QuantizationMismatch(format!(
                    "{} requires at least one scale",
                    self.quant_type
                )));
            }
            if self.scales.len() != self.zero_points.len() {
                return Err(TensorError::QuantizationMismatch(format!(
                    "{} scales but {} zero points",
                    self.scales.len(),
                    self.zero_points.len()
                )));
            }
        }

        if let Some(bad) = self.scales.iter().find(|s| **s <= 0.0) {
            return Err(TensorError::QuantizationMismatch(format!(
                "scale {} is not positive",
                bad
            )));
        }

        Ok(())
    }

    /// [`validate`](Self::validate) plus per-channel agreement with `shape`
    pub fn validate_for_shape(&self, shape: &TensorShape) -> Result<()> {
        self.validate()?;

        if !self.quant_type.is_per_channel() {
            return Ok(());
        }

        let rank = shape.rank();
        let channels = usize::try_from(self.channel_dim)
            .ok()
            .and_then(|axis| shape.dim(axis))
            .ok_or(TensorError::InvalidChannelDim { channel_dim: self.channel_dim, rank })?;

        if self.scales.len() != channels as usize {
            return Err(TensorError::QuantizationMismatch(format!(
                "{} per-channel scales for {} channels along axis {}",
                self.scales.len(),
                channels,
                self.channel_dim
            )));
        }

        Ok(())
    }

    fn params(&self, channel: usize) -> Result<(f32, i32)> {
        match self.quant_type {
            QuantType::None => Ok((1.0, 0)),
            QuantType::SymmetricPerChannel => {
                let channels = self.scales.len().min(self.zero_points.len());
                if channel >= channels {
                    return Err(TensorError::ChannelOutOfRange { channel, channels });
                }
                Ok((self.scales[channel], self.zero_points[channel]))
            }
            QuantType::Asymmetric | QuantType::DynamicFixedPoint => {
                match (self.scales.first(), self.zero_points.first()) {
                    (Some(&scale), Some(&zero_point)) => Ok((scale, zero_point)),
                    _ => Err(TensorError::ChannelOutOfRange { channel: 0, channels: 0 }),
                }
            }
        }
    }

    /// Map a real value to its quantized integer, without range clamping
    ///
    /// `channel` selects the parameter set for per-channel schemes and is
    /// ignored otherwise.
    pub fn quantize(&self, value: f32, channel: usize) -> Result<i32> {
        let (scale, zero_point) = self.params(channel)?;
        let q = (value / scale).round() as i64 + zero_point as i64;
        Ok(q.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Quantize and clamp to the value range of an integer `datatype`
    ///
    /// Returned as `i64` so the full `Uint32` range is representable.
    pub fn quantize_as(&self, datatype: DataType, value: f32, channel: usize) -> Result<i64> {
        let (min, max) =
            datatype.integer_range().ok_or(TensorError::UnsupportedDataType(datatype))?;
        let (scale, zero_point) = self.params(channel)?;
        let q = ((value / scale).round() as i64).saturating_add(zero_point as i64);
        Ok(q.clamp(min, max))
    }

    /// Map a quantized integer back to a real value
    pub fn dequantize(&self, quantized: i32, channel: usize) -> Result<f32> {
        let (scale, zero_point) = self.params(channel)?;
        Ok((quantized as i64 - zero_point as i64) as f32 * scale)
    }
}
