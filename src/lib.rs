//! Intcode virtual machine plus the grid robots and puzzle solvers built on top of it.
//!
//! The machine lives under [`soc`]: program memory in [`soc::device`], the
//! instruction set in [`soc::isa`] and the execution engine in [`soc::core`].
//! [`robot`] drives a machine through the paint-and-turn protocol, while
//! [`classify`] is an unrelated register-machine opcode puzzle.

pub mod classify;
pub mod loader;
pub mod robot;
pub mod soc;
