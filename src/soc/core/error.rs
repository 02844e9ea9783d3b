use thiserror::Error;

use crate::soc::isa::IsaError;

pub type MachineResult<T> = Result<T, MachineError>;

/// Fatal conditions that abort a `run` call. The instruction pointer is left
/// on the instruction that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("fault at address {address}: {source}")]
    Fault {
        address: usize,
        #[source]
        source: IsaError,
    },
    #[error("step limit of {limit} reached at address {address} without halting or blocking")]
    StepLimitExceeded { limit: u64, address: usize },
}

impl MachineError {
    pub fn address(&self) -> usize {
        match self {
            MachineError::Fault { address, .. } => *address,
            MachineError::StepLimitExceeded { address, .. } => *address,
        }
    }
}
