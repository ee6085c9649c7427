//! Device runtime used by the XC engine.
//!
//! Memory handed out by [`DeviceBuffer`] is only reachable through the
//! runtime, and work is ordered per [`Stream`]: launches run one after the
//! other on the stream's worker, asynchronously to the host. Results are
//! only guaranteed to be visible after [`Stream::synchronize`].

mod buffer;
mod error;
mod stream;

pub use buffer::*;
pub use error::*;
pub use stream::*;

#[cfg(test)]
mod tests;
