//! Fetch/decode/execute loop with cooperative suspension on empty input.

use crate::loader::program::{LoadResult, parse_program};
use crate::soc::device::{ProgramMemory, memory::to_index};
use crate::soc::isa::semantics::{self, Flow};
use crate::soc::isa::trace::{ExecutionTracer, TraceEvent};
use crate::soc::isa::{Instruction, IsaError};

use super::config::MachineConfig;
use super::error::{MachineError, MachineResult};
use super::state::{CoreState, RunState};

/// Result of executing a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// An input instruction found the queue empty. The pointer still names it
    /// so the next step retries it.
    Blocked,
    Halted,
}

/// A single machine instance owning its memory, registers and I/O queues.
#[derive(Debug, Clone)]
pub struct Machine {
    state: CoreState,
    config: MachineConfig,
}

impl Machine {
    pub fn new(program: &[i64]) -> Self {
        Self::with_config(program, MachineConfig::default())
    }

    pub fn with_config(program: &[i64], config: MachineConfig) -> Self {
        let memory = ProgramMemory::from_words(program).with_limit(config.memory_limit);
        let mut state = CoreState::with_memory(memory);
        state.trace.set_flags(config.trace);
        Self { state, config }
    }

    /// Parses comma-separated program text and loads it at address 0.
    pub fn from_source(source: &str) -> LoadResult<Self> {
        Ok(Self::new(&parse_program(source)?))
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn state(&self) -> &CoreState {
        &self.state
    }

    pub fn memory(&self) -> &ProgramMemory {
        self.state.memory()
    }

    pub fn instruction_pointer(&self) -> usize {
        self.state.instruction_pointer()
    }

    pub fn relative_base(&self) -> i64 {
        self.state.relative_base()
    }

    pub fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    pub fn enable_tracer(&mut self, tracer: Box<dyn ExecutionTracer>) {
        self.state.trace.set_tracer(Some(tracer));
    }

    pub fn disable_tracer(&mut self) {
        self.state.trace.set_tracer(None);
    }

    /// Queues input without executing anything.
    pub fn push_input<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        self.state.input.extend(values);
    }

    /// Appends `inputs` to the input queue, executes until the machine halts or
    /// blocks on empty input, and returns every value output during this call.
    ///
    /// A halted machine ignores `inputs` and returns no output. On error the
    /// output produced so far in this call is discarded.
    pub fn run<I: IntoIterator<Item = i64>>(&mut self, inputs: I) -> MachineResult<Vec<i64>> {
        if self.is_halted() {
            return Ok(Vec::new());
        }
        self.push_input(inputs);
        let result = self.run_until_suspended();
        let output = std::mem::take(&mut self.state.output);
        result.map(|_| output)
    }

    fn run_until_suspended(&mut self) -> MachineResult<StepOutcome> {
        let mut steps: u64 = 0;
        loop {
            if let Some(limit) = self.config.step_limit {
                if steps >= limit {
                    return Err(MachineError::StepLimitExceeded {
                        limit,
                        address: self.state.pointer,
                    });
                }
            }
            match self.step()? {
                StepOutcome::Continue => steps += 1,
                outcome => return Ok(outcome),
            }
        }
    }

    /// Executes the instruction at the instruction pointer.
    pub fn step(&mut self) -> MachineResult<StepOutcome> {
        if self.is_halted() {
            return Ok(StepOutcome::Halted);
        }
        let address = self.state.pointer;
        let fault = |source: IsaError| MachineError::Fault { address, source };

        let word = self.state.memory.fetch(address);
        let instruction = Instruction::decode(word).map_err(fault)?;
        self.state.trace.emit(TraceEvent::Fetch {
            address,
            word,
            opcode: instruction.opcode(),
        });

        match semantics::execute(&instruction, address, &mut self.state).map_err(fault)? {
            Flow::Advance => {
                self.state.pointer = address + instruction.width();
                Ok(StepOutcome::Continue)
            }
            Flow::Jump(target) => {
                let to = to_index(target).map_err(|err| fault(err.into()))?;
                self.state.pointer = to;
                self.state.trace.emit(TraceEvent::Jump { from: address, to });
                Ok(StepOutcome::Continue)
            }
            Flow::Blocked => {
                self.state.trace.emit(TraceEvent::Blocked { address });
                Ok(StepOutcome::Blocked)
            }
            Flow::Halt => {
                self.state.run_state = RunState::Halted;
                self.state.trace.emit(TraceEvent::Halt { address });
                Ok(StepOutcome::Halted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soc::device::DeviceError;

    #[test]
    fn immediate_mode_arithmetic() {
        let mut machine = Machine::new(&[1101, 100, -1, 4, 0, 99]);
        assert_eq!(machine.run([]), Ok(vec![]));
        assert!(machine.is_halted());
        assert_eq!(machine.memory().read(4), Ok(99));
    }

    #[test]
    fn position_mode_arithmetic() {
        let mut machine = Machine::new(&[1, 0, 0, 0, 99]);
        machine.run([]).expect("run");
        assert_eq!(machine.memory().read(0), Ok(2));
    }

    #[test]
    fn blocked_input_resumes_on_next_call() {
        let mut machine = Machine::new(&[3, 0, 4, 0, 99]);
        assert_eq!(machine.run([]), Ok(vec![]));
        assert!(!machine.is_halted());
        assert_eq!(machine.instruction_pointer(), 0, "pointer stays on input");

        assert_eq!(machine.run([7]), Ok(vec![7]));
        assert!(machine.is_halted());
    }

    #[test]
    fn step_reports_each_outcome() {
        let mut machine = Machine::new(&[3, 5, 99]);
        assert_eq!(machine.step(), Ok(StepOutcome::Blocked));
        machine.push_input([1]);
        assert_eq!(machine.step(), Ok(StepOutcome::Continue));
        assert_eq!(machine.step(), Ok(StepOutcome::Halted));
        assert_eq!(machine.step(), Ok(StepOutcome::Halted));
    }

    #[test]
    fn unused_input_carries_over() {
        // in [20]; out [20]; in [20]; out [20]; hlt
        let mut machine = Machine::new(&[3, 20, 4, 20, 3, 20, 4, 20, 99]);
        assert_eq!(machine.run([1, 2, 3]), Ok(vec![1, 2]));
        assert!(machine.is_halted());
        assert_eq!(machine.state().pending_input().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn halted_machine_ignores_further_runs() {
        let mut machine = Machine::new(&[104, 5, 99]);
        assert_eq!(machine.run([]), Ok(vec![5]));
        let memory = machine.memory().clone();
        let pointer = machine.instruction_pointer();
        for _ in 0..3 {
            assert_eq!(machine.run([1, 2]), Ok(vec![]));
        }
        assert_eq!(machine.memory(), &memory);
        assert_eq!(machine.instruction_pointer(), pointer);
        assert_eq!(machine.state().pending_input().len(), 0);
    }

    #[test]
    fn invalid_opcode_faults_at_address() {
        let mut machine = Machine::new(&[104, 3, 42]);
        let err = machine.run([]).expect_err("opcode 42 is invalid");
        assert_eq!(
            err,
            MachineError::Fault {
                address: 2,
                source: IsaError::InvalidOpcode {
                    word: 42,
                    opcode: 42
                },
            }
        );
        assert_eq!(err.address(), 2);
    }

    #[test]
    fn negative_jump_target_faults() {
        let mut machine = Machine::new(&[1105, 1, -4, 99]);
        let err = machine.run([]).expect_err("negative target");
        assert_eq!(
            err,
            MachineError::Fault {
                address: 0,
                source: IsaError::Device(DeviceError::NegativeAddress { address: -4 }),
            }
        );
        assert_eq!(machine.instruction_pointer(), 0);
    }

    #[test]
    fn fault_discards_partial_output() {
        let mut machine = Machine::new(&[104, 1, 104, 2, 77]);
        assert!(machine.run([]).is_err());
        assert_eq!(machine.instruction_pointer(), 4);
        assert!(machine.run([]).is_err(), "fault repeats on retry");
    }

    #[test]
    fn step_limit_stops_infinite_loops() {
        let config = MachineConfig::builder().step_limit(50).build();
        let mut machine = Machine::with_config(&[1105, 1, 0], config);
        assert_eq!(
            machine.run([]),
            Err(MachineError::StepLimitExceeded {
                limit: 50,
                address: 0
            })
        );
    }

    #[test]
    fn memory_limit_is_applied() {
        let config = MachineConfig::builder().memory_limit(8).build();
        let mut machine = Machine::with_config(&[1101, 1, 1, 100, 99], config);
        let err = machine.run([]).expect_err("write beyond limit");
        assert_eq!(
            err,
            MachineError::Fault {
                address: 0,
                source: IsaError::Device(DeviceError::CapacityExceeded {
                    address: 100,
                    limit: 8
                }),
            }
        );
    }

    #[test]
    fn clones_run_independently() {
        let mut original = Machine::new(&[3, 10, 4, 10, 99]);
        original.run([]).expect("block");
        let mut fork = original.clone();
        assert_eq!(original.run([1]), Ok(vec![1]));
        assert_eq!(fork.run([2]), Ok(vec![2]));
    }

    #[test]
    fn from_source_parses_program_text() {
        let mut machine = Machine::from_source("104,42,99\n").expect("parse");
        assert_eq!(machine.run([]), Ok(vec![42]));
    }
}
