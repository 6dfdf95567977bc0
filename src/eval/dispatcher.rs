use std::io::Write;

use tracing::debug;

use super::tokenizer::tokenize;
use crate::errors::Result;
use crate::exec::{builtin_funcs, Builtin, Executable, Runnable};
use crate::state::ShellState;

/// Represents a collection of builtin commands
/// Allows for command resolution and execution, falling back to executables on the search path
pub struct Dispatcher {
    commands: Vec<Builtin>,
}

impl Default for Dispatcher {
    /// Initializes the `Dispatcher` with the default shell builtins
    fn default() -> Self {
        let mut dispatcher = Self::new();

        dispatcher.add_builtin("exit", builtin_funcs::exit);
        dispatcher.add_builtin("env", builtin_funcs::environment);

        dispatcher
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Adds a builtin to the `Dispatcher`
    fn add_builtin<F: Fn(&mut ShellState, &mut dyn Write, &[&str]) -> Result<()> + 'static>(
        &mut self,
        name: &str,
        function: F,
    ) {
        self.commands.push(Builtin::new(name, function))
    }

    /// Attempts to locate a builtin command by name
    fn resolve(&self, command_name: &str) -> Option<&Builtin> {
        self.commands
            .iter()
            .find(|command| command.name == command_name)
    }

    /// Evaluates and executes a command from a string
    /// A line without any tokens is not an error, and nothing is run for it
    pub fn eval(&self, shell: &mut ShellState, out: &mut dyn Write, line: &str) -> Result<()> {
        let args = tokenize(line);
        if args.is_empty() {
            return Ok(());
        }

        self.dispatch(shell, out, &args)
    }

    /// Resolves and dispatches a command to the appropriate builtin or executable
    fn dispatch(&self, shell: &mut ShellState, out: &mut dyn Write, args: &[&str]) -> Result<()> {
        let command_name = args[0];

        // If the command resides in the Dispatcher it is a builtin, so run it in-process
        if let Some(command) = self.resolve(command_name) {
            debug!(command = command_name, "running builtin");
            return command.run(shell, out, args);
        }

        // Otherwise, look for an executable, either directly or on the search path
        let path = shell.search_path.resolve(command_name)?;
        debug!(command = command_name, path = %path.display(), "resolved executable");
        Executable::new(path).run(shell, out, args)
    }
}
