//! Exchange-correlation kernels.
//!
//! An [`XCKernel`] binds a functional, a spin treatment and one of two
//! interchangeable backends: the closed-form kernels of this crate
//! ([`Backend::Builtin`]) or the `xcref` reference library
//! ([`Backend::External`]). Both produce the energy per particle `exc` and
//! the derivatives `vrho`, `vsigma` over a batch of grid points, on the
//! host or through a device stream.

pub mod backend;
pub mod bimap;
pub mod builtin;
pub mod control;
pub mod correlation;
pub mod descriptor;
pub mod device;
pub mod error;
pub mod exchange;
pub mod families;
pub mod functional;
pub mod hybrid;
pub mod kernel;
pub mod layout;
pub mod libref;
pub mod registry;
pub mod traits;

pub use backend::{Write, XcBackend};
pub use control::XcControl;
pub use descriptor::{FunctionalDescriptor, KernelImpl};
pub use error::{XcError, XcResult};
pub use functional::Functional;
pub use kernel::XCKernel;
pub use layout::BufferLayout;
pub use registry::Registry;
pub use traits::{Backend, Spin, XCFamily};

pub use xcdevice::{DeviceBuffer, DeviceError, Stream};
