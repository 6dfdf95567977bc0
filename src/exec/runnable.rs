use std::io::Write;

use crate::errors::Result;
use crate::state::ShellState;

/// Represents either a builtin (internal command) or an executable (external command)
/// A `Runnable` may be executed by calling its `.run()` method
pub trait Runnable {
    /// `arguments` is the full argument list, including the command name as typed
    fn run(&self, shell: &mut ShellState, out: &mut dyn Write, arguments: &[&str]) -> Result<()>;
}
