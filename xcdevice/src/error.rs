//! Error types for the device runtime

use thiserror::Error;

/// Errors reported by allocation, copies and stream launches
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("device allocation of {len} elements failed")]
    Allocation { len: usize },

    #[error("copy size mismatch: device buffer holds {device} elements, host buffer {host}")]
    CopySize { device: usize, host: usize },

    #[error("device memory lock poisoned")]
    Poisoned,

    #[error("stream worker could not be started: {0}")]
    Spawn(String),

    #[error("stream is closed")]
    StreamClosed,

    #[error("launch '{name}' failed: {reason}")]
    Launch { name: &'static str, reason: String },
}

pub type DeviceResult<T> = Result<T, DeviceError>;
