use std::collections::VecDeque;

use crate::soc::device::ProgramMemory;
use crate::soc::isa::trace::TraceSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    /// Terminal. Reached by executing the halt instruction.
    Halted,
}

/// Everything an instruction may touch: memory, instruction pointer, relative
/// base and the two I/O queues.
#[derive(Debug, Clone, Default)]
pub struct CoreState {
    pub(crate) memory: ProgramMemory,
    pub(crate) pointer: usize,
    pub(crate) relative_base: i64,
    pub(crate) input: VecDeque<i64>,
    pub(crate) output: Vec<i64>,
    pub(crate) run_state: RunState,
    pub(crate) trace: TraceSink,
}

impl CoreState {
    pub fn new(program: &[i64]) -> Self {
        Self::with_memory(ProgramMemory::from_words(program))
    }

    pub fn with_memory(memory: ProgramMemory) -> Self {
        Self {
            memory,
            ..Self::default()
        }
    }

    pub fn memory(&self) -> &ProgramMemory {
        &self.memory
    }

    pub fn instruction_pointer(&self) -> usize {
        self.pointer
    }

    pub fn relative_base(&self) -> i64 {
        self.relative_base
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_halted(&self) -> bool {
        self.run_state == RunState::Halted
    }

    /// Values queued but not yet consumed by an input instruction.
    pub fn pending_input(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.input.iter().copied()
    }
}
