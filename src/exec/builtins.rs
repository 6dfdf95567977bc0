/*
A quick write-up on builtins:
Builtins are commands that run inside the shell process instead of being launched as a child.
There are exactly two of them. `exit` stops the shell, and `env` prints the environment the shell
was started with. Everything else is looked up on the search path and launched as an executable.
Builtins only look at the command name; any further arguments are ignored.
 */

mod command;
pub mod functions;

pub use command::Builtin;
