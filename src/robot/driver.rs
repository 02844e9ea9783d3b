use thiserror::Error;

use crate::soc::core::{Machine, MachineError};

use super::grid::{GridWalker, TurnSignal};
use super::render::{Palette, render};

pub type RobotResult<T> = Result<T, RobotError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RobotError {
    #[error("robot program fault: {0}")]
    Machine(#[from] MachineError),
    #[error("expected {expected} output values per step, received {received:?}")]
    Protocol { expected: usize, received: Vec<i64> },
}

/// Couples a machine with the grid it paints.
#[derive(Debug, Clone)]
pub struct HullRobot {
    machine: Machine,
    grid: GridWalker,
    steps: usize,
}

impl HullRobot {
    pub fn new(machine: Machine) -> Self {
        Self::with_grid(machine, GridWalker::new())
    }

    pub fn with_grid(machine: Machine, grid: GridWalker) -> Self {
        Self {
            machine,
            grid,
            steps: 0,
        }
    }

    pub fn grid(&self) -> &GridWalker {
        &self.grid
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Completed paint-turn-move cycles.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Feeds the current cell to the machine and applies the returned paint
    /// value and turn. Returns `false` once the machine has halted.
    pub fn step(&mut self) -> RobotResult<bool> {
        if self.machine.is_halted() {
            return Ok(false);
        }
        let current = self.grid.read().unwrap_or(0);
        let output = self.machine.run([current])?;
        if output.is_empty() && self.machine.is_halted() {
            return Ok(false);
        }
        if output.len() != 2 {
            return Err(RobotError::Protocol {
                expected: 2,
                received: output,
            });
        }
        let (paint, turn) = (output[0], output[1]);
        self.grid.write(paint);
        self.grid.turn(TurnSignal::from_output(turn));
        self.grid.move_forward();
        self.steps += 1;
        Ok(!self.machine.is_halted())
    }

    /// Steps until the machine halts.
    pub fn run(&mut self) -> RobotResult<()> {
        while self.step()? {}
        Ok(())
    }

    pub fn into_grid(self) -> GridWalker {
        self.grid
    }
}

/// Walks from an unpainted origin and counts the cells painted at least once.
pub fn count_painted_panels(program: &[i64]) -> RobotResult<usize> {
    let mut robot = HullRobot::new(Machine::new(program));
    robot.run()?;
    Ok(robot.grid().painted_count())
}

/// Starts on a cell painted 1 and renders the resulting grid.
pub fn paint_registration(program: &[i64], palette: &Palette) -> RobotResult<String> {
    let mut grid = GridWalker::new();
    grid.write(1);
    let mut robot = HullRobot::with_grid(Machine::new(program), grid);
    robot.run()?;
    Ok(render(robot.grid(), palette))
}
