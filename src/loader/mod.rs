//! Program text loading helpers.

pub mod program;

pub use program::{LoadError, LoadResult, load_program, parse_program};
