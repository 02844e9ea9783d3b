use thiserror::Error;

pub type ClassifyResult<T> = Result<T, ClassifyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("malformed sample {index}: {reason}")]
    MalformedSample { index: usize, reason: String },
    #[error("malformed instruction on line {line}: '{text}'")]
    MalformedInstruction { line: usize, text: String },
    #[error("opcode {opcode} matches no operation")]
    Contradiction { opcode: i64 },
    #[error("samples do not determine opcodes {pending:?}")]
    Unresolvable { pending: Vec<i64> },
    #[error("opcode {opcode} is not in the resolved table")]
    UnknownOpcode { opcode: i64 },
    #[error("instruction {index} references a register outside the machine")]
    InvalidOperand { index: usize },
}
