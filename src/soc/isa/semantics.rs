//! Instruction handlers. Each handler works on an explicit [`CoreState`] and
//! reports how control should continue through a [`Flow`]; the engine owns the
//! instruction pointer update.

use crate::soc::core::state::CoreState;

use super::decode::Instruction;
use super::error::{IsaError, IsaResult};
use super::mode::AddressingMode;
use super::opcode::Opcode;
use super::trace::TraceEvent;

/// Control-flow outcome of one executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the instruction following this one.
    Advance,
    /// Continue at the given address.
    Jump(i64),
    /// Input was required but the queue is empty. Nothing was mutated.
    Blocked,
    Halt,
}

/// Resolves the parameters of one decoded instruction located at `address`.
pub struct Operands<'a> {
    instruction: &'a Instruction,
    address: usize,
}

impl<'a> Operands<'a> {
    pub fn new(instruction: &'a Instruction, address: usize) -> Self {
        Self {
            instruction,
            address,
        }
    }

    /// Raw word stored in the slot of the 1-based parameter `param`.
    pub fn slot(&self, state: &CoreState, param: usize) -> IsaResult<i64> {
        if param == 0 || param > self.instruction.param_count() {
            return Err(IsaError::MissingParameter {
                mnemonic: self.instruction.opcode().mnemonic(),
                param,
            });
        }
        Ok(state.memory.fetch(self.address + param))
    }

    /// Effective address named by `param`. Immediate parameters have none.
    pub fn target(&self, state: &CoreState, param: usize) -> IsaResult<i64> {
        let raw = self.slot(state, param)?;
        match self.instruction.mode(param) {
            AddressingMode::Position => Ok(raw),
            AddressingMode::Immediate => Err(IsaError::ImmediateWrite { param }),
            AddressingMode::Relative => raw
                .checked_add(state.relative_base)
                .ok_or_else(|| self.overflow()),
        }
    }

    pub fn read(&self, state: &mut CoreState, param: usize) -> IsaResult<i64> {
        if self.instruction.mode(param) == AddressingMode::Immediate {
            return self.slot(state, param);
        }
        let address = self.target(state, param)?;
        let value = state.memory.read(address)?;
        state.trace.emit(TraceEvent::MemoryRead { address, value });
        Ok(value)
    }

    pub fn write(&self, state: &mut CoreState, param: usize, value: i64) -> IsaResult<()> {
        let address = self.target(state, param)?;
        state.memory.write(address, value)?;
        state.trace.emit(TraceEvent::MemoryWrite { address, value });
        Ok(())
    }

    fn overflow(&self) -> IsaError {
        IsaError::Overflow {
            mnemonic: self.instruction.opcode().mnemonic(),
        }
    }
}

pub fn execute(instruction: &Instruction, address: usize, state: &mut CoreState) -> IsaResult<Flow> {
    let ops = Operands::new(instruction, address);
    match instruction.opcode() {
        Opcode::Add => arithmetic(&ops, state, i64::checked_add),
        Opcode::Multiply => arithmetic(&ops, state, i64::checked_mul),
        Opcode::Input => input(&ops, state),
        Opcode::Output => output(&ops, state),
        Opcode::JumpIfTrue => jump_if(&ops, state, |value| value != 0),
        Opcode::JumpIfFalse => jump_if(&ops, state, |value| value == 0),
        Opcode::LessThan => compare(&ops, state, |lhs, rhs| lhs < rhs),
        Opcode::Equals => compare(&ops, state, |lhs, rhs| lhs == rhs),
        Opcode::AdjustBase => adjust_base(&ops, state),
        Opcode::Halt => Ok(Flow::Halt),
    }
}

fn arithmetic<F>(ops: &Operands<'_>, state: &mut CoreState, op: F) -> IsaResult<Flow>
where
    F: FnOnce(i64, i64) -> Option<i64>,
{
    let lhs = ops.read(state, 1)?;
    let rhs = ops.read(state, 2)?;
    let value = op(lhs, rhs).ok_or_else(|| ops.overflow())?;
    ops.write(state, 3, value)?;
    Ok(Flow::Advance)
}

fn compare<F>(ops: &Operands<'_>, state: &mut CoreState, predicate: F) -> IsaResult<Flow>
where
    F: FnOnce(i64, i64) -> bool,
{
    let lhs = ops.read(state, 1)?;
    let rhs = ops.read(state, 2)?;
    ops.write(state, 3, predicate(lhs, rhs) as i64)?;
    Ok(Flow::Advance)
}

fn input(ops: &Operands<'_>, state: &mut CoreState) -> IsaResult<Flow> {
    let Some(&value) = state.input.front() else {
        return Ok(Flow::Blocked);
    };
    ops.write(state, 1, value)?;
    state.input.pop_front();
    state.trace.emit(TraceEvent::Input { value });
    Ok(Flow::Advance)
}

fn output(ops: &Operands<'_>, state: &mut CoreState) -> IsaResult<Flow> {
    let value = ops.read(state, 1)?;
    state.output.push(value);
    state.trace.emit(TraceEvent::Output { value });
    Ok(Flow::Advance)
}

fn jump_if<F>(ops: &Operands<'_>, state: &mut CoreState, taken: F) -> IsaResult<Flow>
where
    F: FnOnce(i64) -> bool,
{
    let condition = ops.read(state, 1)?;
    let target = ops.read(state, 2)?;
    if taken(condition) {
        Ok(Flow::Jump(target))
    } else {
        Ok(Flow::Advance)
    }
}

fn adjust_base(ops: &Operands<'_>, state: &mut CoreState) -> IsaResult<Flow> {
    let delta = ops.read(state, 1)?;
    state.relative_base = state
        .relative_base
        .checked_add(delta)
        .ok_or_else(|| ops.overflow())?;
    state.trace.emit(TraceEvent::AdjustBase {
        delta,
        base: state.relative_base,
    });
    Ok(Flow::Advance)
}
