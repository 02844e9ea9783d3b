//! Classifies register-machine opcodes from a sample file and runs the
//! program that follows the samples.
//!
//! Usage: `cargo run --bin classify_opcodes -- <input.txt>`.

use std::process::ExitCode;

use intcode::classify::{
    count_ambiguous, execute, parse_instructions, parse_samples, resolve_opcodes, split_input,
};

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: classify_opcodes <input.txt>");
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
    let text = std::fs::read_to_string(path)?;
    let (sample_text, program_text) = split_input(&text);
    let samples = parse_samples(sample_text)?;
    println!(
        "samples matching three or more operations: {}",
        count_ambiguous(&samples, 3)
    );

    let program = parse_instructions(program_text)?;
    if program.is_empty() {
        return Ok(());
    }
    let table = resolve_opcodes(&samples)?;
    for (opcode, op) in table.entries() {
        println!("  {opcode:>2} = {op}");
    }
    let registers = execute(&table, &program)?;
    println!("register 0 after program: {}", registers[0]);
    Ok(())
}
