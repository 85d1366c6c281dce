pub mod commands;

pub use commands::{Cli, print_report, run};
