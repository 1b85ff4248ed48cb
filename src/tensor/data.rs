//! Host backing store for materialized tensors

use crate::error::{Result, TensorError};
use std::sync::Arc;

/// Byte container behind a host tensor
#[derive(Debug, Clone, Default)]
pub enum TensorStorage {
    /// Owned byte vector (most common case)
    Owned(Vec<u8>),

    /// Shared reference-counted bytes, copied on first write
    Shared(Arc<Vec<u8>>),

    /// No data bound yet
    #[default]
    Empty,
}

/// Types of tensor storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Owned in-memory storage
    Owned,
    /// Shared reference-counted storage
    Shared,
    /// Nothing bound
    Empty,
}

impl TensorStorage {
    /// Create owned storage filled with zeros
    pub fn zeros(len: usize) -> Self {
        Self::Owned(vec![0u8; len])
    }

    /// Create owned storage from bytes
    pub fn new_owned(data: Vec<u8>) -> Self {
        Self::Owned(data)
    }

    /// Create shared storage from bytes
    pub fn new_shared(data: Arc<Vec<u8>>) -> Self {
        Self::Shared(data)
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if the storage holds zero bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if storage has been bound (an empty tensor's storage is still bound)
    pub fn is_bound(&self) -> bool {
        !matches!(self, TensorStorage::Empty)
    }

    /// Borrow the bytes (empty when nothing is bound)
    pub fn as_slice(&self) -> &[u8] {
        match self {
            TensorStorage::Owned(data) => data,
            TensorStorage::Shared(data) => data,
            TensorStorage::Empty => &[],
        }
    }

    /// Mutable access, detaching shared storage first
    pub fn make_mut(&mut self) -> &mut [u8] {
        match self {
            TensorStorage::Owned(data) => data,
            TensorStorage::Shared(data) => Arc::make_mut(data).as_mut_slice(),
            TensorStorage::Empty => &mut [],
        }
    }

    /// Get the storage kind
    pub fn kind(&self) -> StorageKind {
        match self {
            TensorStorage::Owned(_) => StorageKind::Owned,
            TensorStorage::Shared(_) => StorageKind::Shared,
            TensorStorage::Empty => StorageKind::Empty,
        }
    }

    /// Overwrite the first `data.len()` bytes, leaving the rest untouched
    pub fn write_prefix(&mut self, data: &[u8]) -> Result<()> {
        let capacity = self.len();
        if data.len() > capacity {
            return Err(TensorError::BufferTooLarge { size: data.len(), capacity });
        }
        self.make_mut()[..data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Copy the whole contents into the front of `out`
    pub fn read_into(&self, out: &mut [u8]) -> Result<()> {
        let src = self.as_slice();
        if out.len() < src.len() {
            return Err(TensorError::BufferTooSmall { required: src.len(), actual: out.len() });
        }
        out[..src.len()].copy_from_slice(src);
        Ok(())
    }

    /// Calculate a simple checksum of the data (for integrity checking)
    pub fn checksum(&self) -> u32 {
        let mut checksum = 0u32;

        for (i, &byte) in self.as_slice().iter().enumerate() {
            checksum = checksum.wrapping_add((byte as u32) << (i % 24));
            checksum = checksum.wrapping_mul(0x9e37_79b9);
        }

        checksum
    }

    /// Get a hexadecimal representation of the first few bytes (for debugging)
    pub fn hex_preview(&self, max_bytes: usize) -> String {
        let data = self.as_slice();
        let preview_len = max_bytes.min(data.len());

        if preview_len == 0 {
            return "[]".to_string();
        }

        let hex: String = data[..preview_len]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");

        if data.len() > max_bytes {
            format!("[{} ... ({} more bytes)]", hex, data.len() - preview_len)
        } else {
            format!("[{}]", hex)
        }
    }
}
