//! Command-line interface module.

mod commands;
mod serve;
mod write;

pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;
pub use write::handle_write_command;
