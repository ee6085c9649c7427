//! Error types for the XC module

use crate::traits::Backend;
use thiserror::Error;
use xcdevice::DeviceError;

/// Errors that can occur while building or evaluating an XC kernel
#[derive(Error, Debug)]
pub enum XcError {
    /// A name or identifier is absent from the registry
    #[error("functional {0} not found in the registry")]
    NotFound(String),

    /// A registry table repeats a name or an identifier
    #[error("duplicate registry entry: {0} must be unique")]
    DuplicateValue(String),

    /// Wrong call shape for the bound family, short buffers, bad settings
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The selected backend reported a failure
    #[error("{backend} backend failed in {call} for {functional}: {source}")]
    BackendFailure {
        functional: String,
        backend: Backend,
        call: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type XcResult<T> = Result<T, XcError>;
