//! Command handlers for CLI subcommands

mod completions;
mod config;
mod greet;
mod square;
mod write_constant;

pub use completions::handle_completions;
pub use config::handle_config;
pub use greet::handle_greet;
pub use square::handle_square;
pub use write_constant::handle_write_constant;
