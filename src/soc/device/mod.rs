//! Program memory device backing a machine's address space.

pub mod error;
pub mod memory;

pub use error::{DeviceError, DeviceResult};
pub use memory::ProgramMemory;
