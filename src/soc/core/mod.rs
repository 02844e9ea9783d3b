//! Machine core: register/queue state, configuration and the execution engine
//! that drives the instruction set until it halts or waits for input.

pub mod config;
pub mod error;
pub mod machine;
pub mod state;

pub use config::{MachineConfig, MachineConfigBuilder};
pub use error::{MachineError, MachineResult};
pub use machine::{Machine, StepOutcome};
pub use state::{CoreState, RunState};
