mod config;
mod environment;
mod path;
mod shell;

pub use config::{Configuration, ShellArgs};
pub use environment::Environment;
pub use shell::ShellState;
