//! CLI module - argument parsing and batch conversion

mod args;
pub mod batch;

pub use args::{hoist_negative_values, Cli, Commands, UnitArgs};
pub use batch::{evaluate_batch, read_batch, run_batch};
