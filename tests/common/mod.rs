#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use intcode::soc::isa::trace::{ExecutionTracer, TraceEvent};

/// Collects trace events into a shared buffer the test can inspect.
pub struct RecordingTracer {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl RecordingTracer {
    pub fn new() -> (Self, Rc<RefCell<Vec<TraceEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

impl ExecutionTracer for RecordingTracer {
    fn on_event(&mut self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Reads one input per cycle, always answers paint 0 / turn right, and halts
/// after `cycles` cycles.
pub fn turn_right_program(cycles: i64) -> Vec<i64> {
    vec![
        3, 100, // in [100]
        104, 0, // out 0
        104, 1, // out 1
        1001, 101, 1, 101, // [101] += 1
        1008, 101, cycles, 103, // [103] = [101] == cycles
        1006, 103, 0, // jz [103] -> 0
        99,
    ]
}
