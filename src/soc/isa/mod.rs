//! Instruction set of the machine: word decoding, addressing modes, opcode
//! table and the per-instruction semantics.
//!
//! An instruction word packs the opcode into its two least-significant decimal
//! digits; each further digit, read least-significant-first, selects the
//! [`AddressingMode`] of one parameter.

pub mod decode;
pub mod error;
pub mod mode;
pub mod opcode;
pub mod semantics;
pub mod trace;

pub use decode::Instruction;
pub use error::{IsaError, IsaResult};
pub use mode::AddressingMode;
pub use opcode::Opcode;
pub use semantics::Flow;
