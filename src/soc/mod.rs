//! Machine-level building blocks: memory device, instruction set and core.

pub mod core;
pub mod device;
pub mod isa;
