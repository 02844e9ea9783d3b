use std::fmt;
use std::io::Write;

use bitflags::bitflags;

use super::opcode::Opcode;

bitflags! {
    /// Categories of [`TraceEvent`] forwarded to an attached tracer.
    #[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
    pub struct TraceFlags: u8 {
        const FETCH   = 0b1;
        const MEMORY  = 0b10;
        const IO      = 0b100;
        const CONTROL = 0b1000;
    }
}

/// Events emitted while the machine executes so tooling can build
/// pipeline-style traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Fetch {
        address: usize,
        word: i64,
        opcode: Opcode,
    },
    MemoryRead {
        address: i64,
        value: i64,
    },
    MemoryWrite {
        address: i64,
        value: i64,
    },
    Input {
        value: i64,
    },
    Output {
        value: i64,
    },
    Jump {
        from: usize,
        to: usize,
    },
    AdjustBase {
        delta: i64,
        base: i64,
    },
    Blocked {
        address: usize,
    },
    Halt {
        address: usize,
    },
}

impl TraceEvent {
    pub fn category(&self) -> TraceFlags {
        match self {
            TraceEvent::Fetch { .. } => TraceFlags::FETCH,
            TraceEvent::MemoryRead { .. } | TraceEvent::MemoryWrite { .. } => TraceFlags::MEMORY,
            TraceEvent::Input { .. } | TraceEvent::Output { .. } => TraceFlags::IO,
            TraceEvent::Jump { .. }
            | TraceEvent::AdjustBase { .. }
            | TraceEvent::Blocked { .. }
            | TraceEvent::Halt { .. } => TraceFlags::CONTROL,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Fetch {
                address,
                word,
                opcode,
            } => write!(f, "[Fetch] {address:06} {word:>6} {opcode}"),
            TraceEvent::MemoryRead { address, value } => {
                write!(f, "[ Read]   [{address}] -> {value}")
            }
            TraceEvent::MemoryWrite { address, value } => {
                write!(f, "[Write]   [{address}] <- {value}")
            }
            TraceEvent::Input { value } => write!(f, "[Input]   <- {value}"),
            TraceEvent::Output { value } => write!(f, "[  Out]   -> {value}"),
            TraceEvent::Jump { from, to } => write!(f, "[ Jump] {from:06} -> {to:06}"),
            TraceEvent::AdjustBase { delta, base } => {
                write!(f, "[ Base]   {delta:+} = {base}")
            }
            TraceEvent::Blocked { address } => {
                write!(f, "[Block] {address:06} waiting for input")
            }
            TraceEvent::Halt { address } => write!(f, "[ Halt] {address:06}"),
        }
    }
}

/// Consumers implement this trait to receive execution trace events.
pub trait ExecutionTracer {
    fn on_event(&mut self, event: TraceEvent);
}

/// Simple tracer that prints one line per event.
pub struct PipelinePrinter<W: Write> {
    writer: W,
}

impl<W: Write> PipelinePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PipelinePrinter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ExecutionTracer for PipelinePrinter<W> {
    fn on_event(&mut self, event: TraceEvent) {
        let _ = writeln!(self.writer, "{event}");
    }
}

/// Tracer slot owned by the machine state. Events outside `flags` are dropped
/// before they reach the tracer.
#[derive(Default)]
pub struct TraceSink {
    tracer: Option<Box<dyn ExecutionTracer>>,
    flags: TraceFlags,
}

impl TraceSink {
    pub fn set_tracer(&mut self, tracer: Option<Box<dyn ExecutionTracer>>) {
        self.tracer = tracer;
    }

    pub fn set_flags(&mut self, flags: TraceFlags) {
        self.flags = flags;
    }

    pub fn is_enabled(&self) -> bool {
        self.tracer.is_some()
    }

    pub fn emit(&mut self, event: TraceEvent) {
        if let Some(tracer) = self.tracer.as_mut() {
            if self.flags.contains(event.category()) {
                tracer.on_event(event);
            }
        }
    }
}

// A cloned machine keeps its filter but starts without a tracer.
impl Clone for TraceSink {
    fn clone(&self) -> Self {
        Self {
            tracer: None,
            flags: self.flags,
        }
    }
}

impl fmt::Debug for TraceSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceSink")
            .field("enabled", &self.is_enabled())
            .field("flags", &self.flags)
            .finish()
    }
}
