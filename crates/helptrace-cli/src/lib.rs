mod args;
mod commands;
pub mod config;
mod dataset;
mod demo;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, SessionCommand};
pub use commands::run;
