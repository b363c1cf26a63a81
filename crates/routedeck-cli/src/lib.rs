mod args;
mod commands;
mod handlers;
pub mod views;

pub use args::{Cli, Commands, OutputFormat, RouteFieldArgs};
pub use commands::run;
