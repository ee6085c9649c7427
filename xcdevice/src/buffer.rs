use crate::{DeviceError, DeviceResult};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Handle to a device-resident array of `f64`.
///
/// Cloning the handle does not copy memory: both handles refer to the same
/// allocation, the way two copies of a raw device pointer would. The memory
/// is released when the last handle is dropped.
#[derive(Debug, Clone)]
pub struct DeviceBuffer {
    mem: Arc<RwLock<Vec<f64>>>,
    len: usize,
}

impl DeviceBuffer {
    pub fn alloc(len: usize) -> DeviceResult<Self> {
        let mut mem = Vec::new();
        mem.try_reserve_exact(len)
            .map_err(|_| DeviceError::Allocation { len })?;
        mem.resize(len, 0.0);

        Ok(DeviceBuffer {
            mem: Arc::new(RwLock::new(mem)),
            len,
        })
    }

    /// Same as `alloc`; the memory of a fresh buffer always reads as zero.
    pub fn zeros(len: usize) -> DeviceResult<Self> {
        DeviceBuffer::alloc(len)
    }

    /// Allocates a buffer of `src.len()` elements and copies `src` into it.
    pub fn from_host(src: &[f64]) -> DeviceResult<Self> {
        let buf = DeviceBuffer::alloc(src.len())?;
        buf.copy_from_host(src)?;
        Ok(buf)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if both handles point at the same allocation.
    pub fn same_memory(&self, other: &DeviceBuffer) -> bool {
        Arc::ptr_eq(&self.mem, &other.mem)
    }

    pub fn copy_from_host(&self, src: &[f64]) -> DeviceResult<()> {
        if src.len() != self.len {
            return Err(DeviceError::CopySize {
                device: self.len,
                host: src.len(),
            });
        }

        self.write()?.copy_from_slice(src);

        Ok(())
    }

    pub fn copy_to_host(&self, dst: &mut [f64]) -> DeviceResult<()> {
        if dst.len() != self.len {
            return Err(DeviceError::CopySize {
                device: self.len,
                host: dst.len(),
            });
        }

        dst.copy_from_slice(&self.read()?);

        Ok(())
    }

    /// Copies the whole buffer back into a new host vector.
    pub fn to_host(&self) -> DeviceResult<Vec<f64>> {
        Ok(self.read()?.clone())
    }

    pub fn read(&self) -> DeviceResult<RwLockReadGuard<'_, Vec<f64>>> {
        self.mem.read().map_err(|_| DeviceError::Poisoned)
    }

    pub fn write(&self) -> DeviceResult<RwLockWriteGuard<'_, Vec<f64>>> {
        self.mem.write().map_err(|_| DeviceError::Poisoned)
    }
}
