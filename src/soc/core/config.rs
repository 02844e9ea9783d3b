use crate::soc::isa::trace::TraceFlags;

/// Runtime knobs for a [`Machine`](super::Machine). The default places no
/// limits on execution and forwards every trace category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Maximum instructions executed by a single `run` call.
    pub step_limit: Option<u64>,
    /// Maximum number of addressable memory words.
    pub memory_limit: Option<usize>,
    pub trace: TraceFlags,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            step_limit: None,
            memory_limit: None,
            trace: TraceFlags::all(),
        }
    }
}

impl MachineConfig {
    pub fn builder() -> MachineConfigBuilder {
        MachineConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct MachineConfigBuilder {
    config: MachineConfig,
}

impl MachineConfigBuilder {
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.config.step_limit = Some(limit);
        self
    }

    pub fn memory_limit(mut self, words: usize) -> Self {
        self.config.memory_limit = Some(words);
        self
    }

    pub fn trace(mut self, flags: TraceFlags) -> Self {
        self.config.trace = flags;
        self
    }

    pub fn build(self) -> MachineConfig {
        self.config
    }
}
