//! Tensor factory and common spec patterns

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, TensorError};
use crate::format::types::{DataType, QuantType, TensorAttribute};
use crate::tensor::{HostTensor, Quantization, Tensor, TensorId, TensorSpec, TensorStorage};

/// Runtime context creating host tensors with unique ids
///
/// Ids start at 0 and are never reused by the same factory, not even after
/// [`release`](Self::release). Each spec is validated before any storage is
/// allocated. The registry keeps one entry per live tensor until released.
#[derive(Debug, Default)]
pub struct TensorFactory {
    next_id: u32,
    specs: HashMap<TensorId, TensorSpec>,
}

impl TensorFactory {
    /// Create a new tensor factory
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, spec: &TensorSpec) -> Result<TensorId> {
        spec.validate()?;
        let id = TensorId::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(TensorError::IdsExhausted)?;
        self.specs.insert(id, spec.clone());
        Ok(id)
    }

    /// Create a zero-initialized tensor
    pub fn create_tensor(&mut self, spec: TensorSpec) -> Result<HostTensor> {
        let id = self.register(&spec)?;
        HostTensor::regular(id, spec).map_err(|e| self.unregister(id, e))
    }

    /// Create a tensor whose storage is bound later
    pub fn create_placeholder(&mut self, spec: TensorSpec) -> Result<HostTensor> {
        let id = self.register(&spec)?;
        HostTensor::placeholder(id, spec).map_err(|e| self.unregister(id, e))
    }

    /// Create a constant tensor from its initial bytes
    pub fn create_constant(&mut self, spec: TensorSpec, data: Vec<u8>) -> Result<HostTensor> {
        let id = self.register(&spec)?;
        HostTensor::constant(id, spec, TensorStorage::new_owned(data))
            .map_err(|e| self.unregister(id, e))
    }

    /// Copy a tensor's spec, data and role under a fresh id
    pub fn duplicate(&mut self, tensor: &HostTensor) -> Result<HostTensor> {
        let id = self.register(tensor.spec())?;
        Ok(tensor.duplicate_as(id))
    }

    /// Forget a tensor that is no longer in use, returning its creation spec
    pub fn release(&mut self, id: TensorId) -> Option<TensorSpec> {
        let spec = self.specs.remove(&id);
        if spec.is_some() {
            debug!(id = %id, "released tensor");
        }
        spec
    }

    fn unregister(&mut self, id: TensorId, err: TensorError) -> TensorError {
        self.specs.remove(&id);
        debug!(id = %id, error = %err, "tensor creation rejected");
        err
    }

    /// Spec a tensor was created with
    pub fn spec_of(&self, id: TensorId) -> Option<&TensorSpec> {
        self.specs.get(&id)
    }

    /// Number of tensors created
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Check if tensor exists
    pub fn contains(&self, id: TensorId) -> bool {
        self.specs.contains_key(&id)
    }
}

/// Helper for creating common tensor specs
pub struct SpecPatterns;

impl SpecPatterns {
    /// Image batch input; dimensions are given outermost-first and stored
    /// innermost-first as `[width, height, channels, batch]`
    pub fn image_input(
        datatype: DataType,
        batch: u32,
        channels: u32,
        height: u32,
        width: u32,
    ) -> TensorSpec {
        TensorSpec::new(datatype, vec![width, height, channels, batch], TensorAttribute::Input)
    }

    /// Constant weight quantized per output channel along the outermost axis
    pub fn per_channel_weight(
        datatype: DataType,
        shape: Vec<u32>,
        scales: Vec<f32>,
    ) -> TensorSpec {
        let channel_dim = shape.len().saturating_sub(1) as i32;
        let zero_points = vec![0; scales.len()];
        TensorSpec::with_quantization(
            datatype,
            shape,
            TensorAttribute::Constant,
            Quantization::per_channel(QuantType::SymmetricPerChannel, channel_dim, scales, zero_points),
        )
    }
}
