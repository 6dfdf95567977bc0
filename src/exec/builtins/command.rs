use std::io::Write;

use crate::errors::Result;
use crate::exec::runnable::Runnable;
use crate::state::ShellState;

type BuiltinFn = dyn Fn(&mut ShellState, &mut dyn Write, &[&str]) -> Result<()>;

/// Represents a builtin function and the name it is invoked by
pub struct Builtin {
    pub name: String,
    function: Box<BuiltinFn>,
}

impl Builtin {
    pub fn new<F: Fn(&mut ShellState, &mut dyn Write, &[&str]) -> Result<()> + 'static>(
        name: &str,
        function: F,
    ) -> Self {
        Self {
            name: name.to_owned(),
            function: Box::new(function),
        }
    }
}

impl Runnable for Builtin {
    fn run(&self, shell: &mut ShellState, out: &mut dyn Write, arguments: &[&str]) -> Result<()> {
        (self.function)(shell, out, arguments)
    }
}
