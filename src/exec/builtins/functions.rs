use std::io::Write;

use tracing::debug;

use crate::errors::{dispatch_err, Handle, Result};
use crate::state::ShellState;

/// Stops the shell once control returns to the main loop
// * Nothing else is read after this, and launched commands have already finished,
// * since the shell always waits for them
pub fn exit(shell: &mut ShellState, _out: &mut dyn Write, _args: &[&str]) -> Result<()> {
    debug!("exit requested");
    shell.should_exit = true;
    Ok(())
}

/// Prints every inherited environment entry as `KEY=VALUE`, one per line
pub fn environment(shell: &mut ShellState, out: &mut dyn Write, _args: &[&str]) -> Result<()> {
    shell
        .environment
        .write_entries(out)
        .replace_err(|| dispatch_err!(FailedToWriteOutput))
}
