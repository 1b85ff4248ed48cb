//! Host-memory implementation of the tensor contract

use tracing::{debug, trace, warn};

use crate::error::{Result, TensorError};
use crate::format::constants::DEBUG_PREVIEW_BYTES;
use crate::format::types::{DataType, TensorAttribute};
use crate::tensor::{Quantization, Tensor, TensorId, TensorShape, TensorSpec, TensorStorage};

/// Role a host tensor was created with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorRole {
    /// Materialized at creation with zeroed storage
    Regular,
    /// Storage bound later through [`HostTensor::bind`]
    Placeholder,
    /// Compile-time data, writable until finalized
    Constant { finalized: bool },
}

/// Tensor backed by host memory
///
/// Built by [`TensorFactory`](crate::builder::TensorFactory), which assigns the
/// id and validates the spec. The storage length always equals the spec's
/// `mem_size()` once bound. Not `Clone`: copies go through
/// [`TensorFactory::duplicate`](crate::builder::TensorFactory::duplicate) so
/// each one receives its own id.
#[derive(Debug)]
pub struct HostTensor {
    id: TensorId,
    spec: TensorSpec,
    storage: TensorStorage,
    role: TensorRole,
}

impl HostTensor {
    pub(crate) fn regular(id: TensorId, spec: TensorSpec) -> Result<Self> {
        if spec.attr == TensorAttribute::Constant {
            return Err(TensorError::InvalidRole(format!(
                "tensor {} has a CONSTANT spec and must be created with data",
                id
            )));
        }
        let bytes = spec.mem_size()?;
        debug!(id = %id, attr = %spec.attr, bytes, "created host tensor");
        Ok(Self { id, spec, storage: TensorStorage::zeros(bytes), role: TensorRole::Regular })
    }

    pub(crate) fn placeholder(id: TensorId, spec: TensorSpec) -> Result<Self> {
        if spec.attr == TensorAttribute::Constant {
            return Err(TensorError::InvalidRole(format!(
                "tensor {} cannot be both a placeholder and a constant",
                id
            )));
        }
        debug!(id = %id, attr = %spec.attr, "created placeholder tensor");
        Ok(Self { id, spec, storage: TensorStorage::Empty, role: TensorRole::Placeholder })
    }

    pub(crate) fn constant(id: TensorId, spec: TensorSpec, data: TensorStorage) -> Result<Self> {
        if spec.attr != TensorAttribute::Constant {
            return Err(TensorError::InvalidRole(format!(
                "tensor {} has a {} spec, expected CONSTANT",
                id, spec.attr
            )));
        }
        let expected = spec.mem_size()?;
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch { expected, actual: data.len() });
        }
        debug!(
            id = %id,
            bytes = expected,
            preview = %data.hex_preview(DEBUG_PREVIEW_BYTES),
            "created constant tensor"
        );
        Ok(Self { id, spec, storage: data, role: TensorRole::Constant { finalized: false } })
    }

    /// Copy of this tensor under a new id
    pub(crate) fn duplicate_as(&self, id: TensorId) -> Self {
        debug!(source = %self.id, id = %id, "duplicated host tensor");
        Self { id, spec: self.spec.clone(), storage: self.storage.clone(), role: self.role }
    }

    /// Get the role the tensor was created with
    pub fn role(&self) -> TensorRole {
        self.role
    }

    /// Check if storage has been bound
    pub fn is_bound(&self) -> bool {
        self.storage.is_bound()
    }

    /// Borrow the backing storage
    pub fn storage(&self) -> &TensorStorage {
        &self.storage
    }

    /// Bind storage to a placeholder
    ///
    /// The storage must be exactly `mem_size()` bytes. Rebinding replaces the
    /// previous storage.
    pub fn bind(&mut self, storage: TensorStorage) -> Result<()> {
        if self.role != TensorRole::Placeholder {
            return Err(TensorError::InvalidRole(format!(
                "tensor {} is not a placeholder",
                self.id
            )));
        }
        let expected = self.spec.mem_size()?;
        if storage.len() != expected {
            return Err(TensorError::ShapeMismatch { expected, actual: storage.len() });
        }
        debug!(id = %self.id, bytes = expected, kind = ?storage.kind(), "bound placeholder");
        self.storage = storage;
        Ok(())
    }

    /// Freeze a constant's data for graph compilation
    pub fn finalize(&mut self) -> Result<()> {
        match self.role {
            TensorRole::Constant { .. } => {
                self.role = TensorRole::Constant { finalized: true };
                debug!(id = %self.id, checksum = self.storage.checksum(), "finalized constant");
                Ok(())
            }
            _ => Err(TensorError::InvalidRole(format!("tensor {} is not a constant", self.id))),
        }
    }

    /// Replace the quantization parameters wholesale
    ///
    /// The new parameters must agree with the current shape; on error the
    /// tensor keeps its previous quantization.
    pub fn set_quantization(&mut self, quantization: Quantization) -> Result<()> {
        quantization.validate_for_shape(&self.spec.shape)?;
        self.spec.set_quantization(quantization);
        Ok(())
    }
}

impl Tensor for HostTensor {
    fn shape(&self) -> &TensorShape {
        &self.spec.shape
    }

    fn set_shape(&mut self, shape: TensorShape) -> Result<()> {
        let mut reshaped = self.spec.clone();
        reshaped.set_shape(shape);
        reshaped.validate()?;
        if self.storage.is_bound() {
            let actual = reshaped.mem_size()?;
            if actual != self.storage.len() {
                return Err(TensorError::ShapeMismatch { expected: self.storage.len(), actual });
            }
        }
        self.spec = reshaped;
        trace!(id = %self.id, shape = %self.spec.shape, "reshaped tensor");
        Ok(())
    }

    fn data_type(&self) -> DataType {
        self.spec.datatype
    }

    fn quantization(&self) -> &Quantization {
        &self.spec.quantization
    }

    fn spec(&self) -> &TensorSpec {
        &self.spec
    }

    fn id(&self) -> TensorId {
        self.id
    }

    fn copy_data_to_tensor(&mut self, data: &[u8], size: usize) -> Result<()> {
        if self.role == (TensorRole::Constant { finalized: true }) {
            warn!(id = %self.id, "rejected write to finalized constant");
            return Err(TensorError::ConstantFinalized(self.id));
        }
        if !self.storage.is_bound() {
            warn!(id = %self.id, "rejected write to unbound placeholder");
            return Err(TensorError::NotMaterialized(self.id));
        }

        let size = if size == 0 { self.mem_size()? } else { size };
        if size > data.len() {
            return Err(TensorError::BufferTooSmall { required: size, actual: data.len() });
        }

        self.storage.write_prefix(&data[..size])?;
        trace!(id = %self.id, bytes = size, "copied data to tensor");
        Ok(())
    }

    fn copy_data_from_tensor(&self, out: &mut [u8]) -> Result<()> {
        if !self.storage.is_bound() {
            return Err(TensorError::NotMaterialized(self.id));
        }
        self.storage.read_into(out)?;
        trace!(id = %self.id, bytes = self.storage.len(), "copied data from tensor");
        Ok(())
    }

    fn is_placeholder(&self) -> bool {
        self.role == TensorRole::Placeholder
    }

    fn is_const_tensor(&self) -> bool {
        matches!(self.role, TensorRole::Constant { .. })
    }
}
