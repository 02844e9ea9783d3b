use thiserror::Error;

use crate::soc::device::DeviceError;

pub type IsaResult<T> = Result<T, IsaError>;

/// Failures raised while decoding or executing a single instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsaError {
    #[error("invalid opcode {opcode} in instruction word {word}")]
    InvalidOpcode { word: i64, opcode: i64 },
    #[error("invalid addressing mode {digit} for parameter {param} in instruction word {word}")]
    InvalidMode { word: i64, param: usize, digit: i64 },
    #[error("parameter {param} is an immediate operand and cannot be written")]
    ImmediateWrite { param: usize },
    #[error("parameter {param} is out of range for '{mnemonic}'")]
    MissingParameter { mnemonic: &'static str, param: usize },
    #[error("arithmetic overflow in '{mnemonic}'")]
    Overflow { mnemonic: &'static str },
    #[error(transparent)]
    Device(#[from] DeviceError),
}
