//! Runs a hull-painting program from a file.
//!
//! Usage: `cargo run --bin hull_painter -- <program.txt>`. Set `INTCODE_TRACE`
//! to print an execution trace of the first walk to stderr.

use std::process::ExitCode;

use intcode::loader::load_program;
use intcode::robot::{HullRobot, Palette, paint_registration};
use intcode::soc::core::Machine;
use intcode::soc::isa::trace::PipelinePrinter;

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: hull_painter <program.txt>");
        return ExitCode::FAILURE;
    };
    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &std::ffi::OsStr) -> Result<(), Box<dyn std::error::Error>> {
    let program = load_program(path)?;

    let mut machine = Machine::new(&program);
    if std::env::var_os("INTCODE_TRACE").is_some() {
        machine.enable_tracer(Box::new(PipelinePrinter::stderr()));
    }
    let mut robot = HullRobot::new(machine);
    robot.run()?;
    println!("panels painted: {}", robot.grid().painted_count());

    let art = paint_registration(&program, &Palette::default())?;
    println!("registration:\n{art}");
    Ok(())
}
