//! Opcode classification for a four-register machine.
//!
//! Observed samples record register contents before and after one unknown
//! instruction. [`solver::resolve_opcodes`] narrows, for every numeric opcode,
//! the set of operations consistent with all of its samples, then propagates
//! each uniquely determined pairing until the whole table is known.

pub mod error;
pub mod ops;
pub mod sample;
pub mod solver;

pub use error::{ClassifyError, ClassifyResult};
pub use ops::{Operation, Registers};
pub use sample::{Sample, parse_instructions, parse_samples, split_input};
pub use solver::{OpcodeTable, count_ambiguous, execute, matching_operations, resolve_opcodes};
