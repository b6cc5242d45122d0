//! Line-oriented presenter for the demo binary.
//!
//! Stands in for a real screen: it turns typed commands into events and
//! prints every published state and effect.

mod args;
mod command;
mod session;

pub use args::Args;
pub use command::{parse_command, Command, CommandError};
pub use session::{run_session, OutputFormat};
