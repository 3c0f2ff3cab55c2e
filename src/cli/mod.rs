// Command line interface

pub mod commands;
pub mod display;
pub mod plan;
pub mod restore;
pub mod session;

pub use commands::{CliArgs, Commands, GlobalArgs, ListFilterArgs};
pub use session::Session;
